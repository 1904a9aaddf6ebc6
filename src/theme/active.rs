//! The sheet currently styling the application.
//!
//! Readers take an `Arc` snapshot; installing a new sheet swaps the
//! pointer under a write lock, so a reader sees either the old rule set or
//! the new one, never a mix.

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use super::choice::ThemeChoice;
use crate::error::LoadError;
use crate::sheet::StyleSheet;

static ACTIVE: Lazy<RwLock<Arc<StyleSheet>>> = Lazy::new(|| RwLock::new(Arc::new(StyleSheet::new())));

/// Replaces the active sheet, returning the one it replaced.
pub fn install(sheet: StyleSheet) -> Arc<StyleSheet> {
    let sheet = Arc::new(sheet);
    let mut guard = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    tracing::debug!(rules = sheet.len(), "installing active style sheet");
    std::mem::replace(&mut *guard, sheet)
}

/// Snapshot of the active sheet. Empty until something is installed.
pub fn active() -> Arc<StyleSheet> {
    ACTIVE.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Installs the sheet of the chosen theme and returns it.
pub fn apply(choice: ThemeChoice<'_>) -> Arc<StyleSheet> {
    let theme = choice.resolve();
    tracing::info!(theme = theme.name(), "applying theme");
    install(theme.sheet().clone());
    active()
}

/// Loads a sheet file and makes it active.
///
/// A file that cannot be read or parsed is not fatal: a warning is logged,
/// an empty sheet is installed so widgets fall back to their native look,
/// and the error is returned for the caller to report.
pub fn load_theme_file(path: impl AsRef<Path>) -> Result<Arc<StyleSheet>, LoadError> {
    let path = path.as_ref();
    match StyleSheet::from_file(path) {
        Ok(sheet) => {
            tracing::info!(path = %path.display(), rules = sheet.len(), "loaded theme file");
            install(sheet);
            Ok(active())
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "theme file failed to load, using native style");
            install(StyleSheet::new());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::widget::WidgetDescriptor;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_install_returns_previous() {
        install(StyleSheet::new());
        let sheet = StyleSheet::parse("QLabel { color: red; }").unwrap();
        let previous = install(sheet.clone());
        assert!(previous.is_empty());
        assert_eq!(*active(), sheet);
        install(StyleSheet::new());
    }

    #[test]
    #[serial]
    fn test_snapshot_survives_swap() {
        install(StyleSheet::parse("QLabel { color: red; }").unwrap());
        let snapshot = active();
        install(StyleSheet::parse("QLabel { color: blue; }").unwrap());

        let label = WidgetDescriptor::new("QLabel");
        assert_eq!(snapshot.lookup(&label).get("color").unwrap().to_string(), "red");
        assert_eq!(active().lookup(&label).get("color").unwrap().to_string(), "blue");
        install(StyleSheet::new());
    }

    #[test]
    #[serial]
    fn test_apply_fixed_theme() {
        let theme = Theme::parse("plain", "QMenu { padding: 2px; }").unwrap();
        let sheet = apply(ThemeChoice::from(&theme));
        assert_eq!(sheet.len(), 1);
        assert_eq!(*active(), *theme.sheet());
        install(StyleSheet::new());
    }

    #[test]
    #[serial]
    fn test_load_theme_file_failure_installs_empty_sheet() {
        install(StyleSheet::parse("QLabel { color: red; }").unwrap());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "QLabel {{ color: blue;").unwrap();
        let err = load_theme_file(file.path()).unwrap_err();
        assert!(err.parse_error().is_some());
        assert!(active().is_empty());
    }

    #[test]
    #[serial]
    fn test_load_theme_file_success() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "QLabel {{ color: blue; }}").unwrap();
        let sheet = load_theme_file(file.path()).unwrap();
        assert_eq!(sheet.len(), 1);
        install(StyleSheet::new());
    }
}
