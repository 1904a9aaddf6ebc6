use proptest::prelude::*;
use qstyle::{load, WidgetDescriptor};

const CLASSES: &[&str] = &["QPushButton", "QMenu", "QLabel", "QScrollBar"];
const STATES: &[&str] = &["hover", "pressed", "checked", "selected"];
const SUBCONTROLS: &[&str] = &["item", "handle"];
const PROPERTIES: &[&str] = &[
    "color",
    "background-color",
    "padding",
    "border",
    "background",
    "image",
    "opacity",
    "width",
];
const UNITS: &[&str] = &["px", "pt", "em", "ex"];

fn selector() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CLASSES),
        prop::option::of(prop::sample::select(&["ok", "cancel"][..])),
        prop::option::of(prop::sample::select(SUBCONTROLS)),
        prop::collection::vec((prop::sample::select(STATES), prop::bool::ANY), 0..2),
    )
        .prop_map(|(class, id, sub, states)| {
            let mut s = class.to_string();
            if let Some(id) = id {
                s.push('#');
                s.push_str(id);
            }
            if let Some(sub) = sub {
                s.push_str("::");
                s.push_str(sub);
            }
            for (state, negated) in states {
                s.push_str(if negated { ":!" } else { ":" });
                s.push_str(state);
            }
            s
        })
}

/// Two-decimal number such as `12.05`, optionally negative.
fn decimal() -> impl Strategy<Value = String> {
    (prop::bool::ANY, 0u32..100_000).prop_map(|(negative, v)| {
        format!("{}{}.{:02}", if negative { "-" } else { "" }, v / 100, v % 100)
    })
}

/// rgba alpha in every written form: fraction, 0, 1, 1.0, percent or 0-255.
fn alpha() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        Just("1".to_string()),
        Just("1.0".to_string()),
        (0u32..1000).prop_map(|v| format!("0.{:03}", v)),
        (0u32..=10_000).prop_map(|v| format!("{}.{:02}%", v / 100, v % 100)),
        (2u8..=255).prop_map(|v| v.to_string()),
    ]
}

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| format!("#{:02x}{:02x}{:02x}", r, g, b)),
        (any::<u8>(), any::<u8>(), any::<u8>(), alpha())
            .prop_map(|(r, g, b, a)| format!("rgba({}, {}, {}, {})", r, g, b, a)),
        (0u32..40, 0u32..40).prop_map(|(v, h)| format!("{}px {}pt", v, h)),
        decimal(),
        (0u32..10_000).prop_map(|v| format!("{}.{:02}%", v / 100, v % 100)),
        (decimal(), prop::sample::select(UNITS)).prop_map(|(v, unit)| format!("{}{}", v, unit)),
        (0u32..4).prop_map(|w| format!("{}px solid #A0A0A0", w)),
        (0u32..=10, 0u32..=10).prop_map(|(a, b)| format!(
            "qlineargradient(x1:0, y1:0, x2:0, y2:1, stop:0.{} #FFFFFF, stop:1 rgb(0, {}, 0))",
            a % 10,
            b * 20
        )),
        Just("url(:/icons/check.png)".to_string()),
        Just("palette(highlight)".to_string()),
        Just("transparent".to_string()),
        prop::sample::select(&["coral", "DarkSlateGray", "rebeccapurple"][..]).prop_map(String::from),
        Just("\"Segoe UI\", Arial".to_string()),
    ]
}

fn rule() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(selector(), 1..3),
        prop::collection::vec((prop::sample::select(PROPERTIES), value()), 0..4),
    )
        .prop_map(|(selectors, decls)| {
            let body: Vec<String> = decls.iter().map(|(p, v)| format!("{}: {};", p, v)).collect();
            format!("{} {{ {} }}", selectors.join(", "), body.join(" "))
        })
}

fn widget() -> impl Strategy<Value = WidgetDescriptor> {
    (
        prop::sample::select(CLASSES),
        prop::option::of(prop::sample::select(&["ok", "cancel"][..])),
        prop::option::of(prop::sample::select(SUBCONTROLS)),
        prop::sample::subsequence(STATES, 0..=STATES.len()),
    )
        .prop_map(|(class, id, sub, states)| {
            let mut w = WidgetDescriptor::new(class).states(states);
            if let Some(id) = id {
                w = w.id(id);
            }
            if let Some(sub) = sub {
                w = w.subcontrol(sub);
            }
            w
        })
}

proptest! {
    #[test]
    fn serialize_then_reload_gives_same_lookups(
        rules in prop::collection::vec(rule(), 0..6),
        widgets in prop::collection::vec(widget(), 1..6),
    ) {
        let source = rules.join("\n");
        let sheet = load(&source).unwrap();
        let reloaded = load(&sheet.to_qss()).unwrap();

        prop_assert_eq!(&reloaded, &sheet);
        for widget in &widgets {
            prop_assert_eq!(reloaded.lookup(widget), sheet.lookup(widget));
        }
    }

    #[test]
    fn load_is_idempotent(rules in prop::collection::vec(rule(), 0..6)) {
        let source = rules.join("\n");
        prop_assert_eq!(load(&source).unwrap(), load(&source).unwrap());
    }

    #[test]
    fn serialized_form_is_stable(rules in prop::collection::vec(rule(), 0..6)) {
        let once = load(&rules.join("\n")).unwrap().to_qss();
        let twice = load(&once).unwrap().to_qss();
        prop_assert_eq!(once, twice);
    }
}
