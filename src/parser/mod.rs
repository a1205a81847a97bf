//! CSS color string parser.
//!
//! Out-of-range numbers are clamped; anything unrecognized yields `None`.

mod error;
mod functional;
mod hex;
mod number;

use crate::values::{Color, named};
use error::ColorParseError;

/// Syntactic category of a trimmed, lower-cased input.
#[derive(Debug, Clone, PartialEq)]
enum Notation<'a> {
    Hex(&'a str),
    Function { name: &'a str, args: &'a str },
    Keyword(&'a str),
}

impl<'a> Notation<'a> {
    fn classify(s: &'a str) -> Result<Notation<'a>, ColorParseError> {
        if let Some(hex) = s.strip_prefix('#') {
            return Ok(Notation::Hex(hex));
        }
        if let Some((name, rest)) = s.split_once('(') {
            let args = rest.strip_suffix(')').ok_or(ColorParseError::MissingParen)?;
            return Ok(Notation::Function {
                name: name.trim_end(),
                args,
            });
        }
        Ok(Notation::Keyword(s))
    }
}

/// CSSの色文字列を解析する。認識できなければ `None`。
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` and the named keywords (including `transparent`).
pub fn parse(input: &str) -> Option<Color> {
    match parse_color(input) {
        Ok(color) => {
            log::trace!(target: "ColorParser", "Parsed {:?} -> {}", input, color);
            Some(color)
        }
        Err(e) => {
            log::debug!(target: "ColorParser", "Rejected {:?}: {}", input, e);
            None
        }
    }
}

fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    match Notation::classify(&s)? {
        Notation::Hex(digits) => hex::parse_hex(digits),
        Notation::Function { name, args } => match name {
            "rgb" | "rgba" => functional::parse_rgb(args),
            "hsl" => functional::parse_hsl(args, false),
            "hsla" => functional::parse_hsl(args, true),
            _ => Err(ColorParseError::UnknownFunction),
        },
        Notation::Keyword(name) => named::lookup(name).ok_or(ColorParseError::UnknownKeyword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Notation::classify("#fff"), Ok(Notation::Hex("fff")));
        assert_eq!(
            Notation::classify("rgb (1, 2, 3)"),
            Ok(Notation::Function {
                name: "rgb",
                args: "1, 2, 3"
            })
        );
        assert_eq!(Notation::classify("blue"), Ok(Notation::Keyword("blue")));
        assert_eq!(
            Notation::classify("rgb(1, 2, 3"),
            Err(ColorParseError::MissingParen)
        );
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(parse_color("   "), Err(ColorParseError::Empty));
        assert_eq!(parse_color("xxx"), Err(ColorParseError::UnknownKeyword));
        assert_eq!(parse_color("lab(1, 2, 3)"), Err(ColorParseError::UnknownFunction));
        assert_eq!(parse_color("#fffff"), Err(ColorParseError::InvalidHexLength));
        assert_eq!(
            parse_color("rgb(255 128 12 0.5)"),
            Err(ColorParseError::MissingAlphaSlash)
        );
        assert_eq!(parse_color("rgb(a, b, c)"), Err(ColorParseError::InvalidNumber));
    }

    #[test]
    fn test_parse_collapses_to_none() {
        assert_eq!(parse("xxx"), None);
        assert_eq!(parse(" rgb (255, 128, 12)"), Some(Color::rgb(255, 128, 12)));
    }
}
