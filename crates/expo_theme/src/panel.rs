//! Design settings panel
//!
//! The panel is a control surface over a [`ThemeStore`]. It holds no token
//! state of its own: each handler reads `store.current()`, builds the complete
//! next value with one field changed, and hands it to `set_tokens`.

use crate::sink::StyleSink;
use crate::state::ThemeStore;
use crate::tokens::{ColorRole, FontRole, ShadowStyle};

/// A color the panel offers for editing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorInput {
    pub role: ColorRole,
    pub label: &'static str,
    pub description: &'static str,
}

/// Colors shown in the panel. Background and foreground come from presets only.
pub const EDITABLE_COLORS: [ColorInput; 3] = [
    ColorInput {
        role: ColorRole::Primary,
        label: "Primary",
        description: "Main brand color",
    },
    ColorInput {
        role: ColorRole::Secondary,
        label: "Secondary",
        description: "Supporting color",
    },
    ColorInput {
        role: ColorRole::Accent,
        label: "Accent",
        description: "Highlight color",
    },
];

/// Heading font choices as (label, value).
pub const FONT_OPTIONS: [(&str, &str); 2] = [
    ("Geist Sans", "var(--font-geist-sans)"),
    ("Geist Mono", "var(--font-geist-mono)"),
];

/// Border radius choices as (label, value).
pub const RADIUS_OPTIONS: [(&str, &str); 5] = [
    ("None", "0"),
    ("Small", "0.125rem"),
    ("Medium", "0.375rem"),
    ("Large", "0.625rem"),
    ("Extra Large", "1rem"),
];

/// Range and step of the spacing slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingSlider {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const SPACING_SLIDER: SpacingSlider = SpacingSlider {
    min: 0.8,
    max: 1.5,
    step: 0.1,
};

impl SpacingSlider {
    /// Clamp to the slider range and round to the nearest step.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        // Round to step precision so 0.8 + 3 * 0.1 reads back as 1.1.
        let snapped = self.min + steps * self.step;
        let precision = 10f64.powi(self.decimals());
        ((snapped * precision).round() / precision).clamp(self.min, self.max)
    }

    fn decimals(&self) -> i32 {
        let mut decimals = 0;
        let mut step = self.step;
        while step.fract().abs() > 1e-9 && decimals < 6 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }
}

/// One button in the preset grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetEntry {
    pub name: String,
    pub selected: bool,
}

/// Settings panel model
#[derive(Clone, Debug, Default)]
pub struct DesignPanel {
    open: bool,
}

impl DesignPanel {
    /// A closed panel
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Preset buttons in catalog order, marking the current label.
    pub fn preset_entries<S: StyleSink>(&self, store: &ThemeStore<S>) -> Vec<PresetEntry> {
        store
            .presets()
            .names()
            .map(|name| PresetEntry {
                name: name.to_string(),
                selected: name == store.current_preset(),
            })
            .collect()
    }

    pub fn select_preset<S: StyleSink>(&self, store: &mut ThemeStore<S>, name: &str) {
        store.apply_preset(name);
    }

    pub fn set_color<S: StyleSink>(
        &self,
        store: &mut ThemeStore<S>,
        role: ColorRole,
        value: impl Into<String>,
    ) {
        let next = store.current().with_color(role, value);
        store.set_tokens(next);
    }

    pub fn set_font<S: StyleSink>(
        &self,
        store: &mut ThemeStore<S>,
        role: FontRole,
        value: impl Into<String>,
    ) {
        let next = store.current().with_font(role, value);
        store.set_tokens(next);
    }

    /// Set the spacing scale exactly as given.
    pub fn set_spacing<S: StyleSink>(&self, store: &mut ThemeStore<S>, scale: f64) {
        let next = store.current().with_spacing(scale);
        store.set_tokens(next);
    }

    /// Set the spacing scale from a slider position.
    pub fn slide_spacing<S: StyleSink>(&self, store: &mut ThemeStore<S>, position: f64) {
        self.set_spacing(store, SPACING_SLIDER.snap(position));
    }

    pub fn set_radius<S: StyleSink>(&self, store: &mut ThemeStore<S>, value: impl Into<String>) {
        let next = store.current().with_radius(value);
        store.set_tokens(next);
    }

    pub fn set_shadow<S: StyleSink>(&self, store: &mut ThemeStore<S>, style: ShadowStyle) {
        let next = store.current().with_shadow(style);
        store.set_tokens(next);
    }

    /// Label for the spacing slider (`Spacing Scale: 1.1x`).
    pub fn spacing_label<S: StyleSink>(&self, store: &ThemeStore<S>) -> String {
        format!(
            "Spacing Scale: {}x",
            store.current().spacing.to_css_value()
        )
    }
}
