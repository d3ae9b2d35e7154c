//! Expo Theme System
//!
//! Design tokens for the event site, the catalog of named presets, and the
//! projection of the active token set into the page-wide style-variable
//! namespace.
//!
//! # Overview
//!
//! - **Design tokens**: five role colors, two font roles, a spacing scale, a
//!   base border radius, and a shadow style
//! - **Presets**: a closed, ordered catalog of complete token sets
//! - **Store**: the single source of truth for the active tokens, notifying
//!   subscribers synchronously on every change
//! - **Sink**: a one-way projection of tokens into style variables that every
//!   visual component reads through ordinary style resolution
//!
//! # Quick Start
//!
//! ```rust
//! use expo_theme::{PresetCatalog, StyleNamespace, ThemeStore};
//!
//! let mut store = ThemeStore::new(PresetCatalog::builtin(), StyleNamespace::new()).unwrap();
//! store.apply_preset("cyberpunk");
//!
//! assert_eq!(store.sink().property("--primary"), Some("oklch(0.6 0.25 180)"));
//! assert_eq!(store.sink().attribute("data-shadow-style"), Some("sharp"));
//! ```
//!
//! # Control surface
//!
//! The settings panel never merges inside the store. Each edit handler in
//! [`DesignPanel`] copies the current tokens, overwrites one field, and hands
//! the full value back:
//!
//! ```rust
//! use expo_theme::{ColorRole, DesignPanel, PresetCatalog, StyleNamespace, ThemeStore};
//!
//! let mut store = ThemeStore::new(PresetCatalog::builtin(), StyleNamespace::new()).unwrap();
//! let panel = DesignPanel::new();
//! panel.set_color(&mut store, ColorRole::Accent, "oklch(0.7 0.3 120)");
//!
//! assert_eq!(store.sink().property("--chart-1"), Some("oklch(0.7 0.3 120)"));
//! ```

mod error;
pub mod panel;
pub mod presets;
pub mod sink;
pub mod state;
pub mod tokens;

pub use error::ThemeError;
pub use panel::{DesignPanel, PresetEntry, SpacingSlider};
pub use presets::{PresetCatalog, DEFAULT_PRESET};
pub use sink::{StyleNamespace, StyleSink};
pub use state::{SubscriptionId, ThemeStore};
pub use tokens::*;
