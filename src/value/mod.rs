//! Typed property values.
//!
//! Every declaration value in a style sheet parses into a [`Value`]:
//!
//! - [`Color`]: hex literals, `rgb()`/`rgba()` tuples and named colors
//! - [`Gradient`]: `qlineargradient`, `qradialgradient`, `qconicalgradient`
//! - [`Length`]: numbers with a `px`, `pt`, `em` or `ex` suffix
//! - urls, keywords, quoted strings and `palette(role)` references
//!
//! Multi-part values such as `1px solid #A0A0A0` become [`Value::Space`],
//! comma-separated lists such as font families become [`Value::Comma`].
//! The [`Display`](std::fmt::Display) form of a value is valid value text
//! and parses back to an equal value.

mod color;
mod gradient;
mod length;

use std::fmt;

use cssparser::{ToCss, Token};
use serde::{Serialize, Serializer};

pub use color::{is_named_color, Color, HexColor};
pub use gradient::{Gradient, GradientKind, GradientStop, Spread};
pub use length::{Length, LengthUnit};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Color(Color),
    Gradient(Gradient),
    Length(Length),
    Number(f32),
    /// Percentage as a fraction, so `50%` holds `0.5`.
    Percentage(f32),
    /// `url(path)` resource reference. Never resolved here.
    Url(String),
    Keyword(String),
    Str(String),
    /// `palette(role)` reference to the host palette.
    Palette(String),
    /// Whitespace-separated parts.
    Space(Vec<Value>),
    /// Comma-separated parts.
    Comma(Vec<Value>),
}

impl Value {
    pub fn as_color(&self) -> Option<&Color> {
        match self {
            Value::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_length(&self) -> Option<Length> {
        match self {
            Value::Length(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_gradient(&self) -> Option<&Gradient> {
        match self {
            Value::Gradient(g) => Some(g),
            _ => None,
        }
    }

    /// True when this value is the bare keyword `word` (ASCII case-insensitive).
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Value::Keyword(k) if k.eq_ignore_ascii_case(word))
    }

    /// The parts of a multi-part value, or the value itself.
    pub fn parts(&self) -> &[Value] {
        match self {
            Value::Space(parts) | Value::Comma(parts) => parts,
            single => std::slice::from_ref(single),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, parts: &[Value], sep: &str) -> fmt::Result {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        fmt::Display::fmt(part, f)?;
    }
    Ok(())
}

/// Writes `value` with cssparser's number serializer, dropping the `.0`
/// of whole numbers.
pub(crate) fn write_number<W: fmt::Write>(dest: &mut W, value: f32) -> fmt::Result {
    Token::Number {
        has_sign: false,
        value,
        int_value: whole(value),
    }
    .to_css(dest)
}

fn whole(value: f32) -> Option<i32> {
    (value.fract() == 0.0 && value.abs() < i32::MAX as f32).then_some(value as i32)
}

fn url_needs_quotes(path: &str) -> bool {
    path.is_empty()
        || path
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '(' | ')' | '\\'))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => c.fmt(f),
            Value::Gradient(g) => g.fmt(f),
            Value::Length(l) => l.fmt(f),
            Value::Number(n) => write!(f, "{}", n),
            Value::Percentage(p) => Token::Percentage {
                has_sign: false,
                unit_value: *p,
                int_value: whole(*p * 100.0),
            }
            .to_css(f),
            Value::Url(path) if url_needs_quotes(path) => {
                f.write_str("url(")?;
                cssparser::serialize_string(path, f)?;
                f.write_str(")")
            }
            Value::Url(path) => write!(f, "url({})", path),
            Value::Keyword(k) => cssparser::serialize_identifier(k, f),
            Value::Str(s) => cssparser::serialize_string(s, f),
            Value::Palette(role) => {
                f.write_str("palette(")?;
                cssparser::serialize_identifier(role, f)?;
                f.write_str(")")
            }
            Value::Space(parts) => write_joined(f, parts, " "),
            Value::Comma(parts) => write_joined(f, parts, ", "),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
