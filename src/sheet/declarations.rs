//! Ordered property maps.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::ParseResult;
use crate::properties::normalize_property;
use crate::value::Value;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Value,
}

/// Ordered mapping from property name to value.
///
/// Names are stored in their normalized spelling (see
/// [`normalize_property`]) and are unique: inserting an existing
/// name replaces its value in place, so the first-seen position is kept
/// and the last-written value wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<Declaration>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a selector-less declaration list such as
    /// `"background-color: White; border-radius: 5px;"`.
    ///
    /// ```rust
    /// use qstyle::Declarations;
    ///
    /// let decls = Declarations::parse("color: Black; font: 10pt; padding: 2px").unwrap();
    /// assert_eq!(decls.len(), 3);
    /// assert_eq!(decls.get("padding").unwrap().to_string(), "2px");
    /// ```
    pub fn parse(source: &str) -> ParseResult<Self> {
        crate::parser::parse_declaration_list(source, &crate::LoadOptions::default())
    }

    /// Sets `property`, replacing any earlier value.
    pub fn insert(&mut self, property: impl Into<String>, value: Value) {
        let property = normalize_property(&property.into());
        match self.entries.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Declaration { property, value }),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, property: impl Into<String>, value: Value) -> Self {
        self.insert(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        let property = normalize_property(property);
        self.entries
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.get(property).is_some()
    }

    /// Overlays `other` onto `self`; values from `other` win.
    pub fn merge(&mut self, other: &Declarations) {
        for decl in &other.entries {
            self.insert(decl.property.clone(), decl.value.clone());
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Declaration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Declarations {
    type Item = &'a Declaration;
    type IntoIter = std::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, Value)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (property, value) in iter {
            decls.insert(property, value);
        }
        decls
    }
}

/// Inline form: `a: 1px; b: red;`.
impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", decl.property, decl.value)?;
        }
        Ok(())
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for decl in &self.entries {
            map.serialize_entry(&decl.property, &decl.value)?;
        }
        map.end()
    }
}
