//! Widget style sheet tables.
//!
//! `qstyle` loads QSS-style rule blocks into an immutable [`StyleSheet`],
//! answers cascade lookups for a [`WidgetDescriptor`] and serializes the
//! table back to rule-block text.
//!
//! # Core Concepts
//!
//! - [`StyleSheet`]: ordered (selectors, declarations) rules, loaded once
//! - [`Selector`]: type, `#id`, `[property="value"]`, `:state` and
//!   `::subcontrol` patterns joined by descendant or child combinators
//! - [`Value`]: typed property values (colors, gradients, lengths, urls)
//! - [`WidgetDescriptor`]: what a lookup is asked about
//! - [`Theme`] / [`AdaptiveTheme`]: named sheets, light/dark pairs and the
//!   process-wide active sheet
//!
//! # Quick Start
//!
//! ```rust
//! use qstyle::WidgetDescriptor;
//!
//! let sheet = qstyle::load(
//!     r#"
//!     /* buttons */
//!     QPushButton { background-color: #FFFFFF; border: 1px solid #A0A0A0; }
//!     QPushButton:hover { background-color: #E6F0FC; }
//!     "#,
//! )
//! .unwrap();
//!
//! let hovered = sheet.lookup(&WidgetDescriptor::new("QPushButton").state("hover"));
//! assert_eq!(hovered.get("background-color").unwrap().to_string(), "#E6F0FC");
//! assert_eq!(hovered.get("border").unwrap().to_string(), "1px solid #A0A0A0");
//!
//! // Serializing and reloading gives the same table.
//! assert_eq!(qstyle::load(&sheet.to_qss()).unwrap(), sheet);
//! ```
//!
//! # Cascade Order
//!
//! Later rules win by default. [`CascadeOrder::Specificity`] orders
//! matching rules by selector specificity first:
//!
//! ```rust
//! use qstyle::{CascadeOrder, LoadOptions, WidgetDescriptor};
//!
//! let options = LoadOptions::new().cascade(CascadeOrder::Specificity);
//! let sheet = qstyle::load_with("#ok { color: red; } QPushButton { color: blue; }", &options).unwrap();
//! let ok = WidgetDescriptor::new("QPushButton").id("ok");
//! assert_eq!(sheet.lookup(&ok).get("color").unwrap().to_string(), "red");
//! ```

pub mod cascade;
pub mod config;
pub mod error;
mod parser;
pub mod properties;
pub mod selector;
pub mod sheet;
pub mod theme;
pub mod value;
pub mod widget;

pub use cascade::{resolve, MatchedRule};
pub use config::{CascadeOrder, LoadOptions, PropertyPolicy};
pub use error::{LoadError, ParseError, ParseErrorKind, ParseResult};
pub use properties::{is_known_property, normalize_property, KNOWN_PROPERTIES};
pub use selector::{Combinator, Compound, Selector, Specificity};
pub use sheet::{Declaration, Declarations, StyleRule, StyleSheet};
pub use theme::{set_theme_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice};
pub use value::{Color, Gradient, Length, LengthUnit, Value};
pub use widget::WidgetDescriptor;

/// Parses rule-block text into a table with default options.
///
/// Fails on the first malformed construct; no partial table is returned.
pub fn load(source: &str) -> ParseResult<StyleSheet> {
    StyleSheet::parse(source)
}

/// Like [`load`] with explicit options.
pub fn load_with(source: &str, options: &LoadOptions) -> ParseResult<StyleSheet> {
    StyleSheet::parse_with(source, options)
}
