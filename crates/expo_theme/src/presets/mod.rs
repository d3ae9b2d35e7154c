//! Built-in design presets and the preset catalog.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::tokens::*;
use crate::ThemeError;

/// Preset the store is seeded with.
pub const DEFAULT_PRESET: &str = "default";

const GEIST_SANS: &str = "var(--font-geist-sans)";
const GEIST_MONO: &str = "var(--font-geist-mono)";

/// Ordered catalog of named, complete token sets.
///
/// The catalog may be extended while it is being assembled. Once it is handed
/// to a [`ThemeStore`](crate::ThemeStore) it is only reachable through a shared
/// reference and stays closed for the store's lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetCatalog {
    presets: IndexMap<String, DesignTokens>,
}

/// On-disk catalog document: one `[presets.<name>]` table per entry.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    presets: IndexMap<String, DesignTokens>,
}

impl PresetCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The five presets the site ships with, in display order.
    pub fn builtin() -> Self {
        let mut presets = IndexMap::with_capacity(5);
        presets.insert("default".to_string(), default_preset());
        presets.insert("fantasy".to_string(), fantasy_preset());
        presets.insert("cyberpunk".to_string(), cyberpunk_preset());
        presets.insert("minimal".to_string(), minimal_preset());
        presets.insert("retro".to_string(), retro_preset());
        Self { presets }
    }

    pub fn get(&self, name: &str) -> Option<&DesignTokens> {
        self.presets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DesignTokens)> {
        self.presets.iter().map(|(name, tokens)| (name.as_str(), tokens))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Add a preset. Names are unique; an existing entry is never replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        tokens: DesignTokens,
    ) -> Result<(), ThemeError> {
        let name = name.into();
        if self.presets.contains_key(&name) {
            return Err(ThemeError::DuplicatePreset(name));
        }
        debug!("PresetCatalog::insert: {}", name);
        self.presets.insert(name, tokens);
        Ok(())
    }

    /// Parse a TOML catalog document and add every preset in it.
    ///
    /// The document is checked as a whole before anything is added, so a
    /// duplicate name leaves the catalog unchanged.
    ///
    /// ```toml
    /// [presets.ocean]
    /// colors = { primary = "oklch(0.5 0.15 230)", secondary = "oklch(0.9 0.05 220)", accent = "oklch(0.7 0.2 190)", background = "oklch(0.98 0.01 220)", foreground = "oklch(0.2 0.05 240)" }
    /// fonts = { heading = "var(--font-geist-sans)", body = "var(--font-geist-sans)" }
    /// spacing = { scale = 1.0 }
    /// borderRadius = { base = "0.75rem" }
    /// shadows = { style = "soft" }
    /// ```
    pub fn extend_from_toml(&mut self, src: &str) -> Result<(), ThemeError> {
        let file: CatalogFile = toml::from_str(src)?;

        if let Some(name) = file.presets.keys().find(|name| self.contains(name)) {
            return Err(ThemeError::DuplicatePreset(name.clone()));
        }

        for (name, tokens) in file.presets {
            self.insert(name, tokens)?;
        }
        Ok(())
    }

    /// Read a TOML catalog file and add its presets.
    pub fn load_toml_file(&mut self, path: impl AsRef<Path>) -> Result<(), ThemeError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ThemeError::ReadCatalog {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("PresetCatalog::load_toml_file: {}", path.display());
        self.extend_from_toml(&src)
    }
}

fn preset(
    colors: [&str; 5],
    heading: &str,
    scale: f64,
    radius: &str,
    shadow: ShadowStyle,
) -> DesignTokens {
    let [primary, secondary, accent, background, foreground] = colors;
    DesignTokens {
        colors: ColorTokens {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            foreground: foreground.to_string(),
        },
        fonts: FontTokens {
            heading: heading.to_string(),
            body: GEIST_SANS.to_string(),
        },
        spacing: SpacingTokens::new(scale),
        border_radius: RadiusTokens::new(radius),
        shadows: ShadowTokens::new(shadow),
    }
}

fn default_preset() -> DesignTokens {
    preset(
        [
            "oklch(0.205 0 0)",
            "oklch(0.97 0 0)",
            "oklch(0.646 0.222 41.116)",
            "oklch(1 0 0)",
            "oklch(0.145 0 0)",
        ],
        GEIST_SANS,
        1.0,
        "0.625rem",
        ShadowStyle::Soft,
    )
}

fn fantasy_preset() -> DesignTokens {
    preset(
        [
            "oklch(0.45 0.15 280)",
            "oklch(0.85 0.05 320)",
            "oklch(0.65 0.2 45)",
            "oklch(0.98 0.02 320)",
            "oklch(0.15 0.05 280)",
        ],
        GEIST_SANS,
        1.1,
        "1rem",
        ShadowStyle::Soft,
    )
}

fn cyberpunk_preset() -> DesignTokens {
    preset(
        [
            "oklch(0.6 0.25 180)",
            "oklch(0.2 0.1 280)",
            "oklch(0.7 0.3 120)",
            "oklch(0.1 0.05 280)",
            "oklch(0.9 0.1 180)",
        ],
        GEIST_MONO,
        0.9,
        "0.25rem",
        ShadowStyle::Sharp,
    )
}

fn minimal_preset() -> DesignTokens {
    preset(
        [
            "oklch(0.3 0 0)",
            "oklch(0.95 0 0)",
            "oklch(0.5 0 0)",
            "oklch(1 0 0)",
            "oklch(0.1 0 0)",
        ],
        GEIST_SANS,
        1.2,
        "0.125rem",
        ShadowStyle::None,
    )
}

fn retro_preset() -> DesignTokens {
    preset(
        [
            "oklch(0.5 0.2 30)",
            "oklch(0.9 0.1 60)",
            "oklch(0.6 0.25 350)",
            "oklch(0.95 0.05 60)",
            "oklch(0.2 0.1 30)",
        ],
        GEIST_MONO,
        1.1,
        "0.5rem",
        ShadowStyle::Sharp,
    )
}
