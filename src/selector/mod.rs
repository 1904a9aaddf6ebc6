//! Selectors and how they match widgets.
//!
//! A [`Selector`] is a chain of [`Compound`] selectors joined by
//! [`Combinator`]s. The rightmost compound is tested against the widget
//! being styled, the others against its containing widgets:
//!
//! ```text
//! QDialog > QFrame#toolbar QPushButton:!disabled::menu-indicator
//! ^^^^^^^   ^^^^^^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! ancestor  ancestor       subject (type, state, subcontrol)
//! ```

mod specificity;

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::widget::WidgetDescriptor;

pub use specificity::Specificity;

/// The type part of a compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementSelector {
    /// `*`, or nothing written.
    Universal,
    /// `QPushButton`: the class or any subclass.
    Type(String),
    /// `.QPushButton`: exactly this class.
    Exact(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOp {
    /// `[name]`
    Exists,
    /// `[name="value"]`
    Equals,
    /// `[name~="value"]`: whitespace-separated list contains value.
    Includes,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeSelector {
    pub name: String,
    pub op: AttributeOp,
    pub value: String,
}

impl AttributeSelector {
    fn matches(&self, widget: &WidgetDescriptor) -> bool {
        let Some(actual) = widget.property_value(&self.name) else {
            return false;
        };
        match self.op {
            AttributeOp::Exists => true,
            AttributeOp::Equals => actual == self.value,
            AttributeOp::Includes => actual.split_whitespace().any(|w| w == self.value),
        }
    }
}

/// `:state` or its negation `:!state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateSelector {
    pub name: String,
    pub negated: bool,
}

/// One compound selector: `Type#id[attr]::subcontrol:state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compound {
    pub element: ElementSelector,
    pub id: Option<String>,
    pub attributes: Vec<AttributeSelector>,
    pub subcontrol: Option<String>,
    pub states: Vec<StateSelector>,
}

impl Compound {
    /// A compound matching any widget.
    pub fn universal() -> Self {
        Self {
            element: ElementSelector::Universal,
            id: None,
            attributes: Vec::new(),
            subcontrol: None,
            states: Vec::new(),
        }
    }

    fn is_bare_universal(&self) -> bool {
        self.id.is_none()
            && self.attributes.is_empty()
            && self.subcontrol.is_none()
            && self.states.is_empty()
    }

    /// Tests this compound against one widget. `subject` is true for the
    /// widget being styled, whose subcontrol must agree with ours.
    fn matches(&self, widget: &WidgetDescriptor, subject: bool) -> bool {
        let element = match &self.element {
            ElementSelector::Universal => true,
            ElementSelector::Type(name) => widget.is_a(name),
            ElementSelector::Exact(name) => widget.class() == name,
        };
        if !element {
            return false;
        }
        if let Some(id) = &self.id {
            if widget.object_name() != Some(id.as_str()) {
                return false;
            }
        }
        if subject && self.subcontrol.as_deref() != widget.subcontrol_name() {
            return false;
        }
        self.attributes.iter().all(|a| a.matches(widget))
            && self
                .states
                .iter()
                .all(|s| widget.has_state(&s.name) != s.negated)
    }

    fn specificity(&self) -> Specificity {
        let ids = self.id.is_some() as u32;
        let mut classes = (self.attributes.len() + self.states.len()) as u32;
        let mut types = self.subcontrol.is_some() as u32;
        match self.element {
            ElementSelector::Universal => {}
            ElementSelector::Type(_) => types += 1,
            ElementSelector::Exact(_) => classes += 1,
        }
        Specificity(ids, classes, types)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            ElementSelector::Universal if self.is_bare_universal() => f.write_str("*")?,
            ElementSelector::Universal => {}
            ElementSelector::Type(name) => cssparser::serialize_identifier(name, f)?,
            ElementSelector::Exact(name) => {
                f.write_str(".")?;
                cssparser::serialize_identifier(name, f)?;
            }
        }
        if let Some(id) = &self.id {
            f.write_str("#")?;
            cssparser::serialize_name(id, f)?;
        }
        for attr in &self.attributes {
            f.write_str("[")?;
            cssparser::serialize_identifier(&attr.name, f)?;
            match attr.op {
                AttributeOp::Exists => {}
                AttributeOp::Equals => {
                    f.write_str("=")?;
                    cssparser::serialize_string(&attr.value, f)?;
                }
                AttributeOp::Includes => {
                    f.write_str("~=")?;
                    cssparser::serialize_string(&attr.value, f)?;
                }
            }
            f.write_str("]")?;
        }
        if let Some(sub) = &self.subcontrol {
            f.write_str("::")?;
            cssparser::serialize_identifier(sub, f)?;
        }
        for state in &self.states {
            f.write_str(if state.negated { ":!" } else { ":" })?;
            cssparser::serialize_identifier(&state.name, f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: any containing widget.
    Descendant,
    /// `>`: the direct parent.
    Child,
}

/// A full selector: compounds left to right, joined by combinators.
///
/// Invariant: `combinators.len() + 1 == compounds.len()` and only the last
/// compound may name a subcontrol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    compounds: Vec<Compound>,
    combinators: Vec<Combinator>,
}

impl Selector {
    /// A selector made of a single compound.
    pub fn from_compound(compound: Compound) -> Self {
        Self {
            compounds: vec![compound],
            combinators: Vec::new(),
        }
    }

    /// Builds a selector from its parts. Returns `None` when the parts
    /// break the invariant above.
    pub fn from_parts(compounds: Vec<Compound>, combinators: Vec<Combinator>) -> Option<Self> {
        let (_, ancestors) = compounds.split_last()?;
        if combinators.len() + 1 != compounds.len()
            || ancestors.iter().any(|c| c.subcontrol.is_some())
        {
            return None;
        }
        Some(Self {
            compounds,
            combinators,
        })
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn combinators(&self) -> &[Combinator] {
        &self.combinators
    }

    /// The rightmost compound, tested against the styled widget itself.
    pub fn subject(&self) -> &Compound {
        &self.compounds[self.compounds.len() - 1]
    }

    pub fn specificity(&self) -> Specificity {
        self.compounds
            .iter()
            .map(Compound::specificity)
            .fold(Specificity::default(), |acc, s| acc + s)
    }

    pub fn matches(&self, widget: &WidgetDescriptor) -> bool {
        let last = self.compounds.len() - 1;
        self.compounds[last].matches(widget, true) && self.matches_ancestors(last, widget)
    }

    /// `compounds[index]` matched `widget`; checks everything to its left.
    fn matches_ancestors(&self, index: usize, widget: &WidgetDescriptor) -> bool {
        if index == 0 {
            return true;
        }
        let target = &self.compounds[index - 1];
        match self.combinators[index - 1] {
            Combinator::Child => widget
                .parent_widget()
                .is_some_and(|p| target.matches(p, false) && self.matches_ancestors(index - 1, p)),
            Combinator::Descendant => widget
                .ancestors()
                .any(|a| target.matches(a, false) && self.matches_ancestors(index - 1, a)),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.compounds.iter().enumerate() {
            if i > 0 {
                match self.combinators[i - 1] {
                    Combinator::Descendant => f.write_str(" ")?,
                    Combinator::Child => f.write_str(" > ")?,
                }
            }
            compound.fmt(f)?;
        }
        Ok(())
    }
}

impl FromStr for Selector {
    type Err = ParseError;

    /// Parses a single selector (no commas).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_selector(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sel(s: &str) -> Selector {
        s.parse().unwrap()
    }

    #[test]
    fn test_type_matches_subclass() {
        let w = WidgetDescriptor::new("QPushButton").inherits("QAbstractButton");
        assert!(sel("QAbstractButton").matches(&w));
        assert!(sel("QPushButton").matches(&w));
        assert!(!sel("QToolButton").matches(&w));
    }

    #[test]
    fn test_exact_class_ignores_subclass() {
        let w = WidgetDescriptor::new("QPushButton").inherits("QAbstractButton");
        assert!(sel(".QPushButton").matches(&w));
        assert!(!sel(".QAbstractButton").matches(&w));
    }

    #[test]
    fn test_id_and_states() {
        let w = WidgetDescriptor::new("QPushButton")
            .id("btnAddTrack")
            .state("hover");
        assert!(sel("QPushButton#btnAddTrack").matches(&w));
        assert!(sel("#btnAddTrack:hover").matches(&w));
        assert!(!sel("QPushButton#other").matches(&w));
        assert!(!sel("QPushButton:pressed").matches(&w));
        assert!(sel("QPushButton:!pressed").matches(&w));
        assert!(!sel("QPushButton:!hover").matches(&w));
    }

    #[test]
    fn test_subcontrol_must_agree() {
        let bar = WidgetDescriptor::new("QScrollBar").state("hover");
        let handle = bar.clone().subcontrol("handle");
        assert!(sel("QScrollBar").matches(&bar));
        assert!(!sel("QScrollBar").matches(&handle));
        assert!(sel("QScrollBar::handle").matches(&handle));
        assert!(sel("QScrollBar::handle:hover").matches(&handle));
        assert!(!sel("QScrollBar::handle").matches(&bar));
    }

    #[test]
    fn test_attributes() {
        let w = WidgetDescriptor::new("QPushButton")
            .property("flat", "true")
            .property("tags", "primary large");
        assert!(sel("QPushButton[flat]").matches(&w));
        assert!(sel("QPushButton[flat=\"true\"]").matches(&w));
        assert!(!sel("QPushButton[flat=\"false\"]").matches(&w));
        assert!(sel("QPushButton[tags~=\"large\"]").matches(&w));
        assert!(!sel("QPushButton[tags~=\"lar\"]").matches(&w));
        assert!(!sel("QPushButton[missing]").matches(&w));
    }

    #[test]
    fn test_descendant_and_child() {
        let dialog = WidgetDescriptor::new("QDialog");
        let frame = WidgetDescriptor::new("QFrame").parent(dialog);
        let button = WidgetDescriptor::new("QPushButton").parent(frame);

        assert!(sel("QDialog QPushButton").matches(&button));
        assert!(sel("QFrame > QPushButton").matches(&button));
        assert!(!sel("QDialog > QPushButton").matches(&button));
        assert!(sel("QDialog > QFrame > QPushButton").matches(&button));
        assert!(!sel("QMainWindow QPushButton").matches(&button));
    }

    #[test]
    fn test_specificity() {
        assert_eq!(sel("*").specificity(), Specificity(0, 0, 0));
        assert_eq!(sel("QPushButton").specificity(), Specificity(0, 0, 1));
        assert_eq!(sel("QPushButton:hover").specificity(), Specificity(0, 1, 1));
        assert_eq!(
            sel("QScrollBar::handle:hover").specificity(),
            Specificity(0, 1, 2)
        );
        assert_eq!(sel("#ok").specificity(), Specificity(1, 0, 0));
        assert_eq!(
            sel("QDialog .QPushButton[flat=\"true\"]").specificity(),
            Specificity(0, 2, 1)
        );
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(
            sel("QDialog>QFrame  QScrollBar:hover::handle").to_string(),
            "QDialog > QFrame QScrollBar::handle:hover"
        );
        assert_eq!(sel("*:hover").to_string(), ":hover");
        assert_eq!(sel("*").to_string(), "*");
        assert_eq!(
            sel("QPushButton#ok[flat=\"true\"]:!pressed").to_string(),
            "QPushButton#ok[flat=\"true\"]:!pressed"
        );
    }

    #[test]
    fn test_from_parts_rejects_inner_subcontrol() {
        let mut inner = Compound::universal();
        inner.subcontrol = Some("handle".into());
        assert!(
            Selector::from_parts(vec![inner, Compound::universal()], vec![Combinator::Child])
                .is_none()
        );
        assert!(Selector::from_parts(vec![], vec![]).is_none());
    }
}
