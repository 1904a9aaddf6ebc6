//! Theme struct for naming and extending style sheets.

use std::path::Path;

use crate::error::{LoadError, ParseResult};
use crate::sheet::{StyleRule, StyleSheet};

/// A named style sheet.
///
/// # Example
///
/// ```rust
/// use qstyle::{StyleRule, Theme};
///
/// let theme = Theme::parse("compact", "QPushButton { padding: 2px; }")
///     .unwrap()
///     .add(StyleRule::parse("QToolButton { padding: 1px; }").unwrap());
///
/// assert_eq!(theme.name(), "compact");
/// assert_eq!(theme.sheet().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    name: String,
    pub(crate) sheet: StyleSheet,
}

impl Theme {
    pub fn new(name: impl Into<String>, sheet: StyleSheet) -> Self {
        Self {
            name: name.into(),
            sheet,
        }
    }

    /// Parses `source` as the theme's sheet.
    pub fn parse(name: impl Into<String>, source: &str) -> ParseResult<Self> {
        Ok(Self::new(name, StyleSheet::parse(source)?))
    }

    /// Loads a theme from a sheet file, named after the file stem
    /// (`themes/darkmode.qss` is `darkmode`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, StyleSheet::from_file(path)?))
    }

    /// Appends a rule, returning an updated theme for chaining.
    ///
    /// The rule goes after every existing rule, so it wins ties.
    pub fn add(mut self, rule: StyleRule) -> Self {
        self.sheet = self.sheet.with_rule(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying sheet.
    pub fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    pub fn into_sheet(self) -> StyleSheet {
        self.sheet
    }
}
