//! Hue angles (deg, rad, turn, grad)

use std::f64::consts::PI;

/// 角度の単位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Deg,
    Rad,
    Turn,
    Grad,
}

impl AngleUnit {
    /// 単位サフィックスから（大文字小文字は区別しない）
    pub fn from_suffix(suffix: &str) -> Option<AngleUnit> {
        match suffix.to_ascii_lowercase().as_str() {
            "" | "deg" => Some(AngleUnit::Deg),
            "rad" => Some(AngleUnit::Rad),
            "turn" => Some(AngleUnit::Turn),
            "grad" => Some(AngleUnit::Grad),
            _ => None,
        }
    }

    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Deg => value,
            AngleUnit::Rad => value * 180.0 / PI,
            AngleUnit::Turn => value * 360.0,
            AngleUnit::Grad => value * 360.0 / 400.0,
        }
    }

    /// Splits a token like `0.125turn` into its numeric part and unit.
    pub fn split_token(token: &str) -> Option<(&str, AngleUnit)> {
        let end = token
            .trim_end_matches(|c: char| c.is_ascii_alphabetic())
            .len();
        let (number, suffix) = token.split_at(end);
        Some((number, AngleUnit::from_suffix(suffix)?))
    }
}

/// Reduces degrees into [0, 360). Precision loss on huge inputs is accepted as is.
pub fn normalize_hue(degrees: f64) -> f64 {
    let hue = degrees.rem_euclid(360.0);
    if hue.is_finite() { hue } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_suffix_case_insensitive() {
        assert_eq!(AngleUnit::from_suffix("DEG"), Some(AngleUnit::Deg));
        assert_eq!(AngleUnit::from_suffix("Turn"), Some(AngleUnit::Turn));
        assert_eq!(AngleUnit::from_suffix(""), Some(AngleUnit::Deg));
        assert_eq!(AngleUnit::from_suffix("px"), None);
    }

    #[test]
    fn test_to_degrees() {
        assert_eq!(AngleUnit::Turn.to_degrees(0.125), 45.0);
        assert_eq!(AngleUnit::Grad.to_degrees(50.0), 45.0);
        assert!((AngleUnit::Rad.to_degrees(PI / 4.0) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_token() {
        assert_eq!(AngleUnit::split_token("45deg"), Some(("45", AngleUnit::Deg)));
        assert_eq!(AngleUnit::split_token("0.125turn"), Some(("0.125", AngleUnit::Turn)));
        assert_eq!(AngleUnit::split_token("-315"), Some(("-315", AngleUnit::Deg)));
        assert_eq!(AngleUnit::split_token("1e2"), Some(("1e2", AngleUnit::Deg)));
        assert_eq!(AngleUnit::split_token("10px"), None);
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(405.0), 45.0);
        assert_eq!(normalize_hue(-315.0), 45.0);
        assert_eq!(normalize_hue(-675.0), 45.0);
        assert_eq!(normalize_hue(f64::INFINITY), 0.0);
        assert!(normalize_hue(9_999_999_999_999_999_999.0) < 360.0);
    }
}
