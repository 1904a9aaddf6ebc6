//! The style rule table.
//!
//! A [`StyleSheet`] is an ordered list of [`StyleRule`]s loaded once and
//! never modified. It answers [`lookup`](StyleSheet::lookup) queries and
//! serializes back to rule-block text through [`Display`](std::fmt::Display).

mod declarations;
mod rule;

use std::fmt;
use std::path::Path;

pub use declarations::{Declaration, Declarations};
pub use rule::StyleRule;

use crate::config::LoadOptions;
use crate::error::{LoadError, ParseResult};

/// An immutable, ordered table of style rules.
///
/// ```rust
/// use qstyle::{StyleSheet, WidgetDescriptor};
///
/// let sheet = StyleSheet::parse(
///     "QPushButton { background-color: #FFFFFF; }
///      QPushButton:hover { background-color: #E6F0FC; }",
/// )
/// .unwrap();
///
/// let hovered = sheet.lookup(&WidgetDescriptor::new("QPushButton").state("hover"));
/// assert_eq!(hovered.get("background-color").unwrap().to_string(), "#E6F0FC");
///
/// let idle = sheet.lookup(&WidgetDescriptor::new("QPushButton"));
/// assert_eq!(idle.get("background-color").unwrap().to_string(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
    options: LoadOptions,
}

impl StyleSheet {
    /// An empty sheet. Lookups against it return no declarations, leaving
    /// the host's native style in place.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: Vec<StyleRule>, options: LoadOptions) -> Self {
        Self { rules, options }
    }

    /// Parses rule-block text with default options.
    pub fn parse(source: &str) -> ParseResult<Self> {
        Self::parse_with(source, &LoadOptions::default())
    }

    pub fn parse_with(source: &str, options: &LoadOptions) -> ParseResult<Self> {
        let rules = crate::parser::parse_rules(source, options)?;
        tracing::debug!(rules = rules.len(), "parsed style sheet");
        Ok(Self::from_rules(rules, *options))
    }

    /// Reads and parses a sheet file with default options.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_file_with(path, &LoadOptions::default())
    }

    pub fn from_file_with(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading style sheet");
        Self::parse_with(&source, options).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns a copy with `rule` appended after the existing rules.
    pub fn with_rule(mut self, rule: StyleRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Canonical rule-block text; parsing it yields an equivalent sheet.
    pub fn to_qss(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            rule.fmt(f)?;
        }
        Ok(())
    }
}
