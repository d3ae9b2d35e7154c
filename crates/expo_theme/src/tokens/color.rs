//! Color tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic color roles for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Background,
    Foreground,
}

impl ColorRole {
    /// Every role, in declaration order.
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Background,
        ColorRole::Foreground,
    ];

    /// Stable lowercase id, as used in catalogs and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Background => "background",
            Self::Foreground => "foreground",
        }
    }

    /// Look a role up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }
}

/// Complete set of role colors
///
/// Values are color expressions such as `oklch(0.205 0 0)`. Nothing checks
/// their syntax; a malformed value only shows up when the page renders it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl ColorTokens {
    /// Get a color by role
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Background => &self.background,
            ColorRole::Foreground => &self.foreground,
        }
    }

    /// Replace the color for one role
    pub fn set(&mut self, role: ColorRole, value: impl Into<String>) {
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Background => &mut self.background,
            ColorRole::Foreground => &mut self.foreground,
        };
        *slot = value.into();
    }
}
