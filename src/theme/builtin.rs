//! Sheets shipped with the crate.

use super::theme::Theme;
use crate::error::ParseResult;

/// Source of the light sheet.
pub const LIGHT_QSS: &str = include_str!("../../themes/lightmode.qss");

/// Source of the dark sheet.
pub const DARK_QSS: &str = include_str!("../../themes/darkmode.qss");

/// The built-in light theme, named `lightmode`.
pub fn light() -> ParseResult<Theme> {
    Theme::parse("lightmode", LIGHT_QSS)
}

/// The built-in dark theme, named `darkmode`.
pub fn dark() -> ParseResult<Theme> {
    Theme::parse("darkmode", DARK_QSS)
}
