use std::fmt;
use std::str::FromStr;

/// 正規化済みのRGBAカラー (r, g, b: 0–255, a: 0.0–1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK // デフォルトは不透明な黒
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    /// アルファ値は [0, 1] に丸め込まれる（NaNは0扱い）
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Color {
        let a = if a.is_nan() { 0.0 } else { a.clamp(0.0, 1.0) };
        Color { r, g, b, a }
    }

    /// 不透明色
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn a(&self) -> f32 {
        self.a
    }

    /// HSLからの変換（CSS Color Module Level 3のアルゴリズム）
    ///
    /// `hue` は度数、`saturation` と `lightness` は 0.0–1.0 の割合。
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f32) -> Color {
        let h = super::angle::normalize_hue(hue) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
        let m1 = l * 2.0 - m2;

        Color::new(
            to_channel(hue_to_rgb(m1, m2, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(m1, m2, h)),
            to_channel(hue_to_rgb(m1, m2, h - 1.0 / 3.0)),
            alpha,
        )
    }

    /// `#rrggbb`、アルファが1未満なら `#rrggbbaa`
    pub fn to_hex_string(&self) -> String {
        if self.a < 1.0 {
            let a = (self.a * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    pub fn as_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a,
        ]
    }
}

/// Piecewise sector formula; `h` is in turns and may fall slightly outside [0, 1).
fn hue_to_rgb(m1: f64, m2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    } else if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// `str::parse` 用のエラー。詳細は持たない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidColor;

impl fmt::Display for InvalidColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized CSS color")
    }
}

impl std::error::Error for InvalidColor {}

impl FromStr for Color {
    type Err = InvalidColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s).ok_or(InvalidColor)
    }
}
