//! A single rule block.

use std::fmt;

use super::declarations::Declarations;
use crate::error::ParseResult;
use crate::selector::{Selector, Specificity};
use crate::widget::WidgetDescriptor;

/// `selector[, selector ...] { declarations }`.
///
/// The selector list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    selectors: Vec<Selector>,
    declarations: Declarations,
}

impl StyleRule {
    pub fn new(selector: Selector, declarations: Declarations) -> Self {
        Self {
            selectors: vec![selector],
            declarations,
        }
    }

    /// Builds a rule from a selector list; `None` if the list is empty.
    pub fn from_selectors(selectors: Vec<Selector>, declarations: Declarations) -> Option<Self> {
        if selectors.is_empty() {
            return None;
        }
        Some(Self {
            selectors,
            declarations,
        })
    }

    /// Parses exactly one rule block.
    ///
    /// ```rust
    /// use qstyle::StyleRule;
    ///
    /// let rule = StyleRule::parse("QPushButton:hover { background-color: #E6F0FC; }").unwrap();
    /// assert_eq!(rule.selectors().len(), 1);
    /// ```
    pub fn parse(source: &str) -> ParseResult<Self> {
        crate::parser::parse_single_rule(source)
    }

    /// Adds another alternative selector.
    pub fn or(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn declarations(&self) -> &Declarations {
        &self.declarations
    }

    /// Highest specificity among the selectors matching `widget`, or
    /// `None` if none match.
    pub fn match_specificity(&self, widget: &WidgetDescriptor) -> Option<Specificity> {
        self.selectors
            .iter()
            .filter(|s| s.matches(widget))
            .map(Selector::specificity)
            .max()
    }

    pub fn matches(&self, widget: &WidgetDescriptor) -> bool {
        self.selectors.iter().any(|s| s.matches(widget))
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            selector.fmt(f)?;
        }
        f.write_str(" {\n")?;
        for decl in &self.declarations {
            writeln!(f, "    {}: {};", decl.property, decl.value)?;
        }
        f.write_str("}\n")
    }
}
