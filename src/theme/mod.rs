//! Themes and the process-wide active sheet.
//!
//! This module provides:
//!
//! - [`Theme`]: a named style sheet with a fluent builder API
//! - [`AdaptiveTheme`]: light/dark theme pairs with OS detection
//! - [`ThemeChoice`]: reference type for selecting a theme to apply
//! - [`ColorMode`]: light or dark color mode enum
//! - [`builtin`]: the light and dark sheets shipped with the crate
//! - [`install`], [`active`], [`apply`] and [`load_theme_file`]: the
//!   sheet currently styling the application
//!
//! Selecting a theme only swaps which sheet is active; nothing here
//! computes styles beyond the cascade.

mod active;
mod adaptive;
pub mod builtin;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use active::{active, apply, install, load_theme_file};
pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use theme::Theme;
