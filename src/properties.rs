//! Property names understood by the host style engine.

/// Property names accepted under [`PropertyPolicy::KnownOnly`](crate::PropertyPolicy).
pub const KNOWN_PROPERTIES: &[&str] = &[
    "alternate-background-color",
    "background",
    "background-attachment",
    "background-clip",
    "background-color",
    "background-image",
    "background-origin",
    "background-position",
    "background-repeat",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-left-radius",
    "border-bottom-right-radius",
    "border-bottom-style",
    "border-bottom-width",
    "border-color",
    "border-image",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-radius",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-style",
    "border-top",
    "border-top-color",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-top-style",
    "border-top-width",
    "border-width",
    "bottom",
    "button-layout",
    "color",
    "dialogbuttonbox-buttons-have-icons",
    "font",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "gridline-color",
    "height",
    "icon",
    "icon-size",
    "image",
    "image-position",
    "left",
    "lineedit-password-character",
    "lineedit-password-mask-delay",
    "margin",
    "margin-bottom",
    "margin-left",
    "margin-right",
    "margin-top",
    "max-height",
    "max-width",
    "messagebox-text-interaction-flags",
    "min-height",
    "min-width",
    "opacity",
    "outline",
    "outline-bottom-left-radius",
    "outline-bottom-right-radius",
    "outline-color",
    "outline-offset",
    "outline-radius",
    "outline-style",
    "outline-top-left-radius",
    "outline-top-right-radius",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "paint-alternating-row-colors-for-empty-area",
    "position",
    "right",
    "selection-background-color",
    "selection-color",
    "show-decoration-selected",
    "spacing",
    "subcontrol-origin",
    "subcontrol-position",
    "text-align",
    "text-decoration",
    "titlebar-show-tooltips-on-buttons",
    "top",
    "widget-animation-duration",
    "width",
];

const QPROPERTY: &str = "qproperty-";

/// Canonical spelling of a property name. Names are case-insensitive and
/// stored lower-cased, except the widget property after `qproperty-`,
/// which is case-sensitive and kept as written.
pub fn normalize_property(name: &str) -> String {
    match name.get(..QPROPERTY.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(QPROPERTY) => {
            format!("{}{}", QPROPERTY, &name[QPROPERTY.len()..])
        }
        _ => name.to_ascii_lowercase(),
    }
}

/// True when `name` (already normalized) is a known property or uses one
/// of the open-ended prefixes.
pub fn is_known_property(name: &str) -> bool {
    name.starts_with("-qt-")
        || name.starts_with(QPROPERTY)
        || KNOWN_PROPERTIES.binary_search(&name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        let mut sorted = KNOWN_PROPERTIES.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, KNOWN_PROPERTIES);
    }

    #[test]
    fn test_known_and_prefixed() {
        assert!(is_known_property("background-color"));
        assert!(is_known_property("-qt-background-role"));
        assert!(is_known_property("qproperty-iconSize"));
        assert!(!is_known_property("colour"));
    }

    #[test]
    fn test_normalize_keeps_widget_property_case() {
        assert_eq!(normalize_property("Background-Color"), "background-color");
        assert_eq!(normalize_property("QProperty-iconSize"), "qproperty-iconSize");
        assert_eq!(normalize_property("-QT-background-role"), "-qt-background-role");
        assert_eq!(normalize_property("qprop"), "qprop");
    }
}
