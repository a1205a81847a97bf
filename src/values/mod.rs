pub mod angle;
pub mod color;
pub mod named;

pub use angle::AngleUnit;
pub use color::{Color, InvalidColor};
