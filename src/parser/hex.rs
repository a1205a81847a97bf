use super::error::ColorParseError;
use crate::values::Color;

/// Parse the digits after `#`.
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
pub(crate) fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    if !matches!(hex.len(), 3 | 4 | 6 | 8) {
        return Err(ColorParseError::InvalidHexLength);
    }
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigit);
    }

    let channel = |digits: &str| -> Result<u8, ColorParseError> {
        let byte = u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidHexDigit)?;
        // short forms double each digit: f -> ff
        Ok(if digits.len() == 1 { byte * 17 } else { byte })
    };

    let width = if hex.len() <= 4 { 1 } else { 2 };
    let r = channel(&hex[0..width])?;
    let g = channel(&hex[width..width * 2])?;
    let b = channel(&hex[width * 2..width * 3])?;
    let a = if hex.len() == width * 4 {
        channel(&hex[width * 3..])? as f32 / 255.0
    } else {
        1.0
    };

    Ok(Color::new(r, g, b, a))
}
