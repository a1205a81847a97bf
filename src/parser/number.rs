//! Numeric normalization shared by the functional notations.

use super::error::ColorParseError;

/// Parses a plain number. NaN counts as unparseable; infinities are clamped later.
pub(crate) fn parse_number(token: &str) -> Result<f64, ColorParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or(ColorParseError::InvalidNumber)
}

/// Splits off a trailing `%`.
fn split_percent(token: &str) -> (&str, bool) {
    match token.strip_suffix('%') {
        Some(number) => (number, true),
        None => (token, false),
    }
}

/// r/g/b channel: bare 0–255 or 0%–100%, rounded and clamped.
pub(crate) fn parse_channel(token: &str) -> Result<u8, ColorParseError> {
    let (number, percent) = split_percent(token);
    let v = parse_number(number)?;
    let v = if percent { v * 2.55 } else { v };
    Ok(v.round().clamp(0.0, 255.0) as u8)
}

/// Alpha: bare 0–1 or 0%–100%, clamped.
pub(crate) fn parse_alpha(token: &str) -> Result<f32, ColorParseError> {
    let (number, percent) = split_percent(token);
    let v = parse_number(number)?;
    let v = if percent { v / 100.0 } else { v };
    Ok(v.clamp(0.0, 1.0) as f32)
}

/// Saturation/lightness as a 0–1 fraction. A bare number is taken as already
/// normalized (lenient, kept for compatibility).
pub(crate) fn parse_fraction(token: &str) -> Result<f64, ColorParseError> {
    let (number, percent) = split_percent(token);
    let v = parse_number(number)?;
    let v = if percent { v / 100.0 } else { v };
    Ok(v.clamp(0.0, 1.0))
}
