pub mod parser;
pub mod values;

pub use parser::parse;
pub use values::{Color, InvalidColor};
