//! Widget descriptors used for style lookups.

use std::collections::{BTreeMap, BTreeSet};

/// Everything a selector can test about a widget.
///
/// Built with a fluent API:
///
/// ```rust
/// use qstyle::WidgetDescriptor;
///
/// let handle = WidgetDescriptor::new("QScrollBar")
///     .inherits("QAbstractSlider")
///     .inherits("QWidget")
///     .id("logScroll")
///     .state("horizontal")
///     .state("hover")
///     .subcontrol("handle");
///
/// assert!(handle.has_state("hover"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetDescriptor {
    class: String,
    superclasses: Vec<String>,
    object_name: Option<String>,
    states: BTreeSet<String>,
    properties: BTreeMap<String, String>,
    subcontrol: Option<String>,
    parent: Option<Box<WidgetDescriptor>>,
}

impl WidgetDescriptor {
    /// Describes a widget of the given class, e.g. `"QPushButton"`.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    /// Adds a base class; type selectors for base classes match too.
    pub fn inherits(mut self, class: impl Into<String>) -> Self {
        self.superclasses.push(class.into());
        self
    }

    /// Sets the instance identifier matched by `#id`.
    pub fn id(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = Some(object_name.into());
        self
    }

    /// Marks a state such as `"hover"`, `"pressed"` or `"checked"` active.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.states.insert(state.into());
        self
    }

    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Sets a property tested by `[name="value"]` selectors.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Targets a sub-element such as `"handle"` or `"menu-indicator"`.
    pub fn subcontrol(mut self, name: impl Into<String>) -> Self {
        self.subcontrol = Some(name.into());
        self
    }

    /// Sets the containing widget, used by descendant and child selectors.
    pub fn parent(mut self, parent: WidgetDescriptor) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// True if `class` is this widget's class or one of its base classes.
    pub fn is_a(&self, class: &str) -> bool {
        self.class == class || self.superclasses.iter().any(|c| c == class)
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    pub fn property_value(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn subcontrol_name(&self) -> Option<&str> {
        self.subcontrol.as_deref()
    }

    pub fn parent_widget(&self) -> Option<&WidgetDescriptor> {
        self.parent.as_deref()
    }

    /// Iterates over the containing widgets, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &WidgetDescriptor> {
        std::iter::successors(self.parent_widget(), |w| w.parent_widget())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_a_checks_base_classes() {
        let w = WidgetDescriptor::new("QPushButton").inherits("QAbstractButton");
        assert!(w.is_a("QPushButton"));
        assert!(w.is_a("QAbstractButton"));
        assert!(!w.is_a("QToolButton"));
    }

    #[test]
    fn test_states_accumulate() {
        let w = WidgetDescriptor::new("QCheckBox")
            .state("checked")
            .states(["hover", "focus"]);
        assert!(w.has_state("checked"));
        assert!(w.has_state("hover"));
        assert!(w.has_state("focus"));
        assert!(!w.has_state("pressed"));
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let w = WidgetDescriptor::new("QPushButton").parent(
            WidgetDescriptor::new("QFrame").parent(WidgetDescriptor::new("QDialog")),
        );
        let classes: Vec<&str> = w.ancestors().map(|a| a.class()).collect();
        assert_eq!(classes, vec!["QFrame", "QDialog"]);
    }
}
