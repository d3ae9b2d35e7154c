//! Projection of design tokens into the page-wide style namespace
//!
//! Every visual component reads theme values indirectly, through style
//! variables set on the page root (`--primary`, `--radius`, ...) and one
//! discrete attribute (`data-shadow-style`) that style rules switch on.
//! A [`StyleSink`] is whatever owns that namespace: the live page root in a
//! browser host, or a [`StyleNamespace`] that records the writes.

use std::fmt::Write as _;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::tokens::DesignTokens;

/// Attribute carrying the shadow style.
pub const SHADOW_STYLE_ATTRIBUTE: &str = "data-shadow-style";

/// Style variables written on every publication, with their `--` prefix.
pub const PUBLISHED_PROPERTIES: [&str; 8] = [
    "--primary",
    "--secondary",
    "--accent",
    "--chart-1",
    "--font-heading",
    "--font-body",
    "--spacing-scale",
    "--radius",
];

/// Writable style namespace
///
/// Sinks implement the two primitive writes. Writes are unconditional: no
/// value is ever rejected, and a later write to the same name replaces the
/// earlier one.
pub trait StyleSink {
    /// Set a style variable (`--primary`).
    fn set_property(&mut self, name: &str, value: &str);

    /// Set a discrete attribute (`data-shadow-style`).
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Write every published value for `tokens`.
    fn publish(&mut self, tokens: &DesignTokens) {
        tracing::trace!(
            "StyleSink::publish - primary={} shadow={}",
            tokens.colors.primary,
            tokens.shadows.style
        );
        for (name, value) in tokens.to_css_variable_map() {
            self.set_property(&format!("--{name}"), &value);
        }
        self.set_attribute(SHADOW_STYLE_ATTRIBUTE, tokens.shadows.style.as_str());
    }
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn publish(&mut self, tokens: &DesignTokens) {
        (**self).publish(tokens);
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        (**self).set_attribute(name, value);
    }

    fn publish(&mut self, tokens: &DesignTokens) {
        (**self).publish(tokens);
    }
}

/// In-memory style namespace
///
/// Records the last value written to each name. Used by tests to assert the
/// exact published pairs, and by static builds to render a `:root` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StyleNamespace {
    properties: FxHashMap<String, String>,
    attributes: FxHashMap<String, String>,
}

impl StyleNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Number of distinct names written (variables and attributes).
    pub fn len(&self) -> usize {
        self.properties.len() + self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.attributes.is_empty()
    }

    /// Variables sorted by name.
    pub fn properties(&self) -> Vec<(&str, &str)> {
        sorted(&self.properties)
    }

    /// Attributes sorted by name.
    pub fn attributes(&self) -> Vec<(&str, &str)> {
        sorted(&self.attributes)
    }

    /// Render the namespace as a stylesheet rule on the page root.
    ///
    /// Attributes become attribute selectors on `:root`, variables become
    /// declarations, both sorted by name so the output is stable.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root");
        for (name, value) in self.attributes() {
            let _ = write!(css, "[{name}=\"{}\"]", value.replace('"', "\\\""));
        }
        css.push_str(" {\n");
        for (name, value) in self.properties() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    /// Render the namespace as a pretty-printed JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            properties: Vec<(&'a str, &'a str)>,
            attributes: Vec<(&'a str, &'a str)>,
        }

        serde_json::to_string_pretty(&Snapshot {
            properties: self.properties(),
            attributes: self.attributes(),
        })
    }
}

impl StyleSink for StyleNamespace {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

fn sorted(map: &FxHashMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = map
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    entries.sort_unstable_by_key(|(k, _)| *k);
    entries
}
