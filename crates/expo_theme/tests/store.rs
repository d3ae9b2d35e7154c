use std::cell::RefCell;
use std::rc::Rc;

use expo_theme::sink::{PUBLISHED_PROPERTIES, SHADOW_STYLE_ATTRIBUTE};
use expo_theme::{
    ColorRole, DesignPanel, DesignTokens, PresetCatalog, ShadowStyle, StyleNamespace, StyleSink,
    ThemeStore,
};
use pretty_assertions::assert_eq;

fn store() -> ThemeStore {
    ThemeStore::new(PresetCatalog::builtin(), StyleNamespace::new()).unwrap()
}

/// Sink that records every write in order.
#[derive(Default)]
struct RecordingSink {
    writes: Rc<RefCell<Vec<(String, String)>>>,
}

impl StyleSink for RecordingSink {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((name.to_string(), value.to_string()));
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.writes
            .borrow_mut()
            .push((format!("@{name}"), value.to_string()));
    }
}

#[test]
fn applying_a_preset_twice_is_idempotent() {
    let mut store = store();

    store.apply_preset("fantasy");
    let tokens_once = store.current().clone();
    let ns_once = store.sink().clone();

    store.apply_preset("fantasy");
    assert_eq!(store.current(), &tokens_once);
    assert_eq!(store.sink(), &ns_once);
}

#[test]
fn set_tokens_round_trips() {
    let mut store = store();
    let next = PresetCatalog::builtin()
        .get("retro")
        .unwrap()
        .with_color(ColorRole::Background, "not a color")
        .with_spacing(-3.0);

    store.set_tokens(next.clone());
    assert_eq!(store.current(), &next);
}

#[test]
fn catalog_is_unchanged_by_mutations() {
    let mut store = store();
    let before = store.presets().clone();

    store.apply_preset("cyberpunk");
    store.set_tokens(store.current().with_radius("3px"));
    store.apply_preset("does-not-exist");
    store.apply_preset("minimal");

    assert_eq!(store.presets(), &before);
    assert_eq!(store.presets().len(), 5);
}

#[test]
fn unknown_preset_is_a_no_op() {
    let mut store = store();
    store.apply_preset("retro");
    store.set_tokens(store.current().with_spacing(1.5));
    let tokens = store.current().clone();
    let ns = store.sink().clone();

    store.apply_preset("does-not-exist");

    assert_eq!(store.current(), &tokens);
    assert_eq!(store.current_preset(), "retro");
    assert_eq!(store.sink(), &ns);
}

#[test]
fn projection_publishes_all_nine_keys() {
    let mut store = store();
    let x = store.current().with_color(ColorRole::Accent, "oklch(0.7 0.3 120)");
    store.set_tokens(x.clone());

    let ns = store.sink();
    let vars = x.to_css_variable_map();
    for name in PUBLISHED_PROPERTIES {
        let key = name.trim_start_matches("--");
        assert_eq!(ns.property(name), Some(vars[key].as_str()), "{name}");
    }
    assert_eq!(ns.property("--accent"), Some("oklch(0.7 0.3 120)"));
    assert_eq!(ns.property("--chart-1"), Some("oklch(0.7 0.3 120)"));
    assert_eq!(ns.attribute(SHADOW_STYLE_ATTRIBUTE), Some("soft"));
}

#[test]
fn default_to_cyberpunk() {
    let mut store = store();
    assert_eq!(store.current().colors.primary, "oklch(0.205 0 0)");
    assert_eq!(store.current().shadows.style, ShadowStyle::Soft);

    store.apply_preset("cyberpunk");

    assert_eq!(store.current().shadows.style, ShadowStyle::Sharp);
    assert_eq!(store.current().colors.primary, "oklch(0.6 0.25 180)");
    assert_eq!(store.sink().attribute("data-shadow-style"), Some("sharp"));
    assert_eq!(store.current_preset(), "cyberpunk");
}

#[test]
fn sink_is_written_before_set_tokens_returns() {
    let writes = Rc::new(RefCell::new(Vec::new()));
    let sink = RecordingSink {
        writes: writes.clone(),
    };
    let mut store = ThemeStore::new(PresetCatalog::builtin(), sink).unwrap();
    assert_eq!(writes.borrow().len(), 9);

    writes.borrow_mut().clear();
    DesignPanel::new().set_shadow(&mut store, ShadowStyle::None);

    let recorded = writes.borrow();
    assert_eq!(recorded.len(), 9);
    assert!(recorded.contains(&("@data-shadow-style".to_string(), "none".to_string())));
}

#[test]
fn subscriber_sees_each_edit() {
    let mut store = store();
    let seen: Rc<RefCell<Vec<DesignTokens>>> = Rc::default();
    let log = seen.clone();
    store.subscribe(move |tokens| log.borrow_mut().push(tokens.clone()));

    let panel = DesignPanel::new();
    panel.set_color(&mut store, ColorRole::Secondary, "oklch(0.9 0.1 60)");
    panel.select_preset(&mut store, "retro");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].colors.secondary, "oklch(0.9 0.1 60)");
    assert_eq!(&seen[1], store.presets().get("retro").unwrap());
}

#[test]
fn extended_catalog_is_selectable() {
    let mut catalog = PresetCatalog::builtin();
    catalog
        .extend_from_toml(
            r#"
[presets.night]
colors = { primary = "oklch(0.8 0.1 250)", secondary = "oklch(0.25 0.03 250)", accent = "oklch(0.75 0.18 300)", background = "oklch(0.15 0.02 250)", foreground = "oklch(0.95 0 0)" }
fonts = { heading = "var(--font-geist-mono)", body = "var(--font-geist-mono)" }
spacing = { scale = 1 }
borderRadius = { base = "0.375rem" }
shadows = { style = "none" }
"#,
        )
        .unwrap();

    let mut store = ThemeStore::new(catalog, StyleNamespace::new()).unwrap();
    store.apply_preset("night");

    assert_eq!(store.sink().property("--font-body"), Some("var(--font-geist-mono)"));
    assert_eq!(store.sink().property("--spacing-scale"), Some("1"));
    assert_eq!(store.sink().attribute("data-shadow-style"), Some("none"));
}
