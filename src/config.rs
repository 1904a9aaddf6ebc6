//! Load-time configuration.

use serde::Deserialize;

/// How matching rules are ordered before their declarations are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CascadeOrder {
    /// Later rules win, regardless of selector specificity.
    #[default]
    SourceOrder,
    /// More specific selectors win; equal specificity falls back to
    /// source order.
    Specificity,
}

/// Which property names a sheet may declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyPolicy {
    /// Any well-formed name is kept; the host ignores what it does not know.
    #[default]
    AcceptAny,
    /// Names outside [`KNOWN_PROPERTIES`](crate::KNOWN_PROPERTIES) are a
    /// parse error. `-qt-` and `qproperty-` names are always accepted.
    KnownOnly,
}

/// Options applied when loading a sheet. The cascade order travels with
/// the loaded [`StyleSheet`](crate::StyleSheet) and governs its lookups.
///
/// ```rust
/// use qstyle::{CascadeOrder, LoadOptions};
///
/// let opts: LoadOptions = serde_json::from_str(r#"{ "cascade": "specificity" }"#).unwrap();
/// assert_eq!(opts.cascade, CascadeOrder::Specificity);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub cascade: CascadeOrder,
    pub properties: PropertyPolicy,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cascade(mut self, cascade: CascadeOrder) -> Self {
        self.cascade = cascade;
        self
    }

    pub fn properties(mut self, properties: PropertyPolicy) -> Self {
        self.properties = properties;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = LoadOptions::default();
        assert_eq!(opts.cascade, CascadeOrder::SourceOrder);
        assert_eq!(opts.properties, PropertyPolicy::AcceptAny);
    }

    #[test]
    fn test_builder() {
        let opts = LoadOptions::new()
            .cascade(CascadeOrder::Specificity)
            .properties(PropertyPolicy::KnownOnly);
        assert_eq!(opts.cascade, CascadeOrder::Specificity);
        assert_eq!(opts.properties, PropertyPolicy::KnownOnly);
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: LoadOptions = serde_json::from_str(r#"{ "properties": "known-only" }"#).unwrap();
        assert_eq!(opts.cascade, CascadeOrder::SourceOrder);
        assert_eq!(opts.properties, PropertyPolicy::KnownOnly);
    }
}
