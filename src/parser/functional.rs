//! `rgb()`/`rgba()` and `hsl()`/`hsla()` argument lists.

use super::error::ColorParseError;
use super::number::{parse_alpha, parse_channel, parse_fraction, parse_number};
use crate::values::{AngleUnit, Color};

/// Splits the text between the parentheses into 3 or 4 value tokens.
///
/// Commas and whitespace are interchangeable separators. A single `/` may
/// introduce the 4th (alpha) value; without any comma it is mandatory.
fn split_arguments(args: &str) -> Result<Vec<&str>, ColorParseError> {
    let is_separator = |c: char| c == ',' || c.is_whitespace();

    let (head, alpha) = match args.split_once('/') {
        Some((head, alpha)) => (head, Some(alpha)),
        None => (args, None),
    };

    let mut values: Vec<&str> = head.split(is_separator).filter(|t| !t.is_empty()).collect();

    match alpha {
        Some(alpha) => {
            let alpha: Vec<&str> = alpha.split(is_separator).filter(|t| !t.is_empty()).collect();
            if values.len() != 3 || alpha.len() != 1 {
                return Err(ColorParseError::ArgumentCount(values.len() + alpha.len()));
            }
            values.extend(alpha);
        }
        None => {
            if values.len() == 4 && !args.contains(',') {
                return Err(ColorParseError::MissingAlphaSlash);
            }
        }
    }

    log::trace!(target: "ColorParser", "Arguments: {:?}", values);
    Ok(values)
}

/// rgb(r, g, b) / rgb(r g b) / rgb(r g b / a) / rgb(r, g, b, a)
///
/// `rgba` is an alias; both accept 3 or 4 values.
pub(crate) fn parse_rgb(args: &str) -> Result<Color, ColorParseError> {
    let values = split_arguments(args)?;
    let alpha = match values.len() {
        3 => 1.0,
        4 => parse_alpha(values[3])?,
        n => return Err(ColorParseError::ArgumentCount(n)),
    };

    Ok(Color::new(
        parse_channel(values[0])?,
        parse_channel(values[1])?,
        parse_channel(values[2])?,
        alpha,
    ))
}

/// hsl(h, s%, l%) with the same separator rules as `rgb()`.
///
/// `hsla` insists on the alpha value being present.
pub(crate) fn parse_hsl(args: &str, require_alpha: bool) -> Result<Color, ColorParseError> {
    let values = split_arguments(args)?;
    let alpha = match values.len() {
        3 if !require_alpha => 1.0,
        4 => parse_alpha(values[3])?,
        n => return Err(ColorParseError::ArgumentCount(n)),
    };

    let hue = parse_hue(values[0])?;
    let saturation = parse_fraction(values[1])?;
    let lightness = parse_fraction(values[2])?;

    Ok(Color::from_hsl(hue, saturation, lightness, alpha))
}

/// Hue in degrees; `deg` is implied when no unit is given.
fn parse_hue(token: &str) -> Result<f64, ColorParseError> {
    let (number, unit) = AngleUnit::split_token(token).ok_or(ColorParseError::InvalidNumber)?;
    Ok(unit.to_degrees(parse_number(number)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_commas_and_spaces() {
        assert_eq!(split_arguments("255, 128, 12"), Ok(vec!["255", "128", "12"]));
        assert_eq!(split_arguments(" 255 , 128 , 12 "), Ok(vec!["255", "128", "12"]));
        assert_eq!(split_arguments("255 128 12"), Ok(vec!["255", "128", "12"]));
        assert_eq!(split_arguments("255,128 12"), Ok(vec!["255", "128", "12"]));
    }

    #[test]
    fn test_split_alpha_slash() {
        assert_eq!(
            split_arguments("255 128 12 / 0.5"),
            Ok(vec!["255", "128", "12", "0.5"])
        );
        assert_eq!(
            split_arguments("255, 128, 12, 0.5"),
            Ok(vec!["255", "128", "12", "0.5"])
        );
        assert_eq!(
            split_arguments("255 128 12 0.5"),
            Err(ColorParseError::MissingAlphaSlash)
        );
    }

    #[test]
    fn test_split_misplaced_slash() {
        assert_eq!(
            split_arguments("255 128 / 12 0.5"),
            Err(ColorParseError::ArgumentCount(4))
        );
        assert!(split_arguments("255 128 12 / 0.5 / 1").is_err());
        assert!(split_arguments("255 128 12 /").is_err());
    }

    #[test]
    fn test_rgb_argument_count() {
        assert_eq!(parse_rgb("1, 2"), Err(ColorParseError::ArgumentCount(2)));
        assert_eq!(parse_rgb("1, 2, 3, 4, 5"), Err(ColorParseError::ArgumentCount(5)));
        assert_eq!(parse_rgb(""), Err(ColorParseError::ArgumentCount(0)));
    }

    #[test]
    fn test_hsla_requires_alpha() {
        assert_eq!(
            parse_hsl("900, 15%, 90%", true),
            Err(ColorParseError::ArgumentCount(3))
        );
        assert_eq!(
            parse_hsl("900, 15%, 90%", false),
            Ok(Color::rgb(226, 233, 233))
        );
    }

    #[test]
    fn test_hue_units() {
        assert_eq!(parse_hue("45"), Ok(45.0));
        assert_eq!(parse_hue("45deg"), Ok(45.0));
        assert_eq!(parse_hue("50grad"), Ok(45.0));
        assert_eq!(parse_hue("0.125turn"), Ok(45.0));
        assert_eq!(parse_hue("45px"), Err(ColorParseError::InvalidNumber));
        assert_eq!(parse_hue("deg"), Err(ColorParseError::InvalidNumber));
    }
}
