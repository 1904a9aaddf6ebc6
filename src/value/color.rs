//! Color literals.

use std::fmt;

/// A color value as written in a style sheet.
///
/// Equality compares the written form, so `#FFF` and `#FFFFFF` are
/// distinct values even though [`Color::to_rgba`] agrees on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// `#RGB`, `#RRGGBB` or `#AARRGGBB`.
    Hex(HexColor),
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`; channels are 0-255 and the
    /// alpha is written back as a fraction.
    Rgba { r: u8, g: u8, b: u8, a: u8, alpha: bool },
    /// A named color such as `white` or `SteelBlue`, spelled as written.
    Named(String),
}

/// A parsed hex literal, keeping its digit count for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Present only for the 8-digit `#AARRGGBB` form.
    pub a: Option<u8>,
    short: bool,
}

impl HexColor {
    /// Parses the digits after `#`. Accepts 3, 6 or 8 hex digits.
    pub fn parse(digits: &str) -> Option<Self> {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let nibble = |i: usize| byte(&digits[i..i + 1]).map(|v| v * 17);
                Some(Self {
                    r: nibble(0)?,
                    g: nibble(1)?,
                    b: nibble(2)?,
                    a: None,
                    short: true,
                })
            }
            6 => Some(Self {
                r: byte(&digits[0..2])?,
                g: byte(&digits[2..4])?,
                b: byte(&digits[4..6])?,
                a: None,
                short: false,
            }),
            8 => Some(Self {
                a: Some(byte(&digits[0..2])?),
                r: byte(&digits[2..4])?,
                g: byte(&digits[4..6])?,
                b: byte(&digits[6..8])?,
                short: false,
            }),
            _ => None,
        }
    }

    /// A six-digit `#RRGGBB` literal.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: None,
            short: false,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, self.r, self.g, self.b),
            None if self.short => write!(f, "#{:X}{:X}{:X}", self.r / 17, self.g / 17, self.b / 17),
            None => write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b),
        }
    }
}

impl Color {
    /// Shorthand for a six-digit hex color.
    pub fn hex(r: u8, g: u8, b: u8) -> Self {
        Color::Hex(HexColor::rgb(r, g, b))
    }

    /// Resolves to `(r, g, b, a)`. Unknown names resolve to `None`.
    pub fn to_rgba(&self) -> Option<(u8, u8, u8, u8)> {
        match self {
            Color::Hex(hex) => Some((hex.r, hex.g, hex.b, hex.a.unwrap_or(255))),
            Color::Rgba { r, g, b, a, .. } => Some((*r, *g, *b, *a)),
            Color::Named(name) => named_rgba(name),
        }
    }

    /// Nearest index in the ANSI 256-color palette, ignoring alpha.
    pub fn to_ansi256(&self) -> Option<u8> {
        let (r, g, b, _) = self.to_rgba()?;
        Some(if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hex(hex) => hex.fmt(f),
            Color::Rgba {
                r,
                g,
                b,
                a,
                alpha: true,
            } => {
                write!(f, "rgba({}, {}, {}, ", r, g, b)?;
                super::write_number(f, *a as f32 / 255.0)?;
                f.write_str(")")
            }
            Color::Rgba { r, g, b, .. } => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Named(name) => f.write_str(name),
        }
    }
}

/// Returns true when `name` is a color keyword (case-insensitive).
pub fn is_named_color(name: &str) -> bool {
    named_rgba(name).is_some()
}

/// Looks `name` up in cssparser's keyword table. `currentcolor` has no
/// value of its own and is not a color here.
fn named_rgba(name: &str) -> Option<(u8, u8, u8, u8)> {
    match cssparser::parse_color_keyword::<cssparser::Color>(name) {
        Ok(cssparser::Color::Rgba(rgba)) => Some((
            rgba.red?,
            rgba.green?,
            rgba.blue?,
            rgba.alpha.map_or(255, |a| (a * 255.0).round() as u8),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_six_digits() {
        let hex = HexColor::parse("E6F0FC").unwrap();
        assert_eq!((hex.r, hex.g, hex.b, hex.a), (0xE6, 0xF0, 0xFC, None));
        assert_eq!(hex.to_string(), "#E6F0FC");
    }

    #[test]
    fn test_hex_short_form_expands_and_keeps_spelling() {
        let hex = HexColor::parse("fff").unwrap();
        assert_eq!((hex.r, hex.g, hex.b), (255, 255, 255));
        assert_eq!(hex.to_string(), "#FFF");
    }

    #[test]
    fn test_hex_eight_digits_is_argb() {
        let hex = HexColor::parse("800078d7").unwrap();
        assert_eq!(hex.a, Some(0x80));
        assert_eq!((hex.r, hex.g, hex.b), (0x00, 0x78, 0xD7));
        assert_eq!(hex.to_string(), "#800078D7");
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert!(HexColor::parse("12").is_none());
        assert!(HexColor::parse("12345").is_none());
        assert!(HexColor::parse("GGGGGG").is_none());
    }

    #[test]
    fn test_named_colors_are_case_insensitive() {
        assert!(is_named_color("White"));
        assert!(is_named_color("STEELBLUE"));
        assert!(!is_named_color("solid"));
        assert_eq!(
            Color::Named("Green".into()).to_rgba(),
            Some((0, 128, 0, 255))
        );
    }

    #[test]
    fn test_rgba_display() {
        let c = Color::Rgba {
            r: 0,
            g: 120,
            b: 215,
            a: 64,
            alpha: true,
        };
        assert_eq!(c.to_string(), "rgba(0, 120, 215, 0.25098)");
        let c = Color::Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 255,
            alpha: false,
        };
        assert_eq!(c.to_string(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_full_keyword_table() {
        assert_eq!(Color::Named("coral".into()).to_rgba(), Some((255, 127, 80, 255)));
        assert_eq!(Color::Named("RebeccaPurple".into()).to_rgba(), Some((102, 51, 153, 255)));
        assert_eq!(Color::Named("transparent".into()).to_rgba(), Some((0, 0, 0, 0)));
        assert!(!is_named_color("currentcolor"));
    }

    #[test]
    fn test_rgba_alpha_written_as_fraction() {
        let rgba = |a| Color::Rgba {
            r: 255,
            g: 0,
            b: 0,
            a,
            alpha: true,
        };
        assert_eq!(rgba(255).to_string(), "rgba(255, 0, 0, 1)");
        assert_eq!(rgba(0).to_string(), "rgba(255, 0, 0, 0)");
        assert_eq!(rgba(102).to_string(), "rgba(255, 0, 0, 0.4)");
    }

    #[test]
    fn test_to_ansi256() {
        assert_eq!(Color::hex(255, 0, 0).to_ansi256(), Some(196));
        assert_eq!(Color::hex(0, 0, 0).to_ansi256(), Some(16));
        assert_eq!(Color::hex(255, 255, 255).to_ansi256(), Some(231));
        assert_eq!(Color::Named("nope".into()).to_ansi256(), None);
    }
}
