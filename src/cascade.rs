//! Cascade lookups.
//!
//! Matching rules are visited in cascade order and merged property by
//! property, so a later rule overrides an earlier one only for the
//! properties it declares. The order is file order by default, or
//! specificity first with file order breaking ties.

use crate::config::CascadeOrder;
use crate::selector::Specificity;
use crate::sheet::{Declarations, StyleRule, StyleSheet};
use crate::widget::WidgetDescriptor;

/// A rule that applies to a widget, with the specificity of its best
/// matching selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedRule<'a> {
    /// Position of the rule in its sheet.
    pub index: usize,
    pub rule: &'a StyleRule,
    pub specificity: Specificity,
}

impl StyleSheet {
    /// Merged declarations of every rule matching `widget`, using the
    /// sheet's own cascade order.
    ///
    /// A widget no rule matches gets an empty set.
    pub fn lookup(&self, widget: &WidgetDescriptor) -> Declarations {
        self.lookup_with(widget, self.options().cascade)
    }

    /// Like [`lookup`](Self::lookup) with an explicit cascade order.
    pub fn lookup_with(&self, widget: &WidgetDescriptor, order: CascadeOrder) -> Declarations {
        let mut merged = Declarations::new();
        for matched in self.matching_in(widget, order) {
            merged.merge(matched.rule.declarations());
        }
        merged
    }

    /// Matching rules in the order they are applied; the last one wins.
    pub fn matching_rules(&self, widget: &WidgetDescriptor) -> Vec<MatchedRule<'_>> {
        self.matching_in(widget, self.options().cascade)
    }

    fn matching_in(&self, widget: &WidgetDescriptor, order: CascadeOrder) -> Vec<MatchedRule<'_>> {
        let mut matched: Vec<MatchedRule<'_>> = self
            .rules()
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                rule.match_specificity(widget).map(|specificity| MatchedRule {
                    index,
                    rule,
                    specificity,
                })
            })
            .collect();
        if order == CascadeOrder::Specificity {
            // stable: equal specificity keeps file order
            matched.sort_by_key(|m| m.specificity);
        }
        matched
    }
}

/// Layers several sheets and a widget's inline declarations.
///
/// Sheets are applied in the given order (application-wide first, most
/// local last), each with its own cascade order; `inline` is applied last
/// and overrides every sheet.
pub fn resolve(sheets: &[&StyleSheet], inline: Option<&Declarations>, widget: &WidgetDescriptor) -> Declarations {
    let mut merged = Declarations::new();
    for sheet in sheets {
        merged.merge(&sheet.lookup(widget));
    }
    if let Some(inline) = inline {
        merged.merge(inline);
    }
    merged
}
