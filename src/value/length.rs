//! Lengths with unit suffixes.

use std::fmt;

/// Unit suffix of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Px,
    Pt,
    Em,
    Ex,
}

impl LengthUnit {
    /// Parses a unit suffix, ignoring ASCII case.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(LengthUnit::Px),
            "pt" => Some(LengthUnit::Pt),
            "em" => Some(LengthUnit::Em),
            "ex" => Some(LengthUnit::Ex),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Pt => "pt",
            LengthUnit::Em => "em",
            LengthUnit::Ex => "ex",
        }
    }
}

/// A number followed by a unit, e.g. `5px` or `12pt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f32,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f32, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn px(value: f32) -> Self {
        Self::new(value, LengthUnit::Px)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_parse() {
        assert_eq!(LengthUnit::parse("px"), Some(LengthUnit::Px));
        assert_eq!(LengthUnit::parse("PT"), Some(LengthUnit::Pt));
        assert_eq!(LengthUnit::parse("cm"), None);
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(Length::px(5.0).to_string(), "5px");
        assert_eq!(Length::new(1.5, LengthUnit::Em).to_string(), "1.5em");
    }
}
