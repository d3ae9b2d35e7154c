//! The complete token set

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    ColorRole, ColorTokens, FontRole, FontTokens, RadiusTokens, ShadowStyle, ShadowTokens,
    SpacingTokens,
};

/// A complete, fully-populated set of design tokens
///
/// Token sets are replaced wholesale. Editing one field means cloning the
/// current value, changing the field, and handing the whole value back to the
/// store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: ColorTokens,
    pub fonts: FontTokens,
    pub spacing: SpacingTokens,
    pub border_radius: RadiusTokens,
    pub shadows: ShadowTokens,
}

impl DesignTokens {
    pub fn color(&self, role: ColorRole) -> &str {
        self.colors.get(role)
    }

    pub fn font(&self, role: FontRole) -> &str {
        self.fonts.get(role)
    }

    pub fn shadow_style(&self) -> ShadowStyle {
        self.shadows.style
    }

    /// Copy of these tokens with one color replaced.
    pub fn with_color(&self, role: ColorRole, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.colors.set(role, value);
        next
    }

    /// Copy of these tokens with one font replaced.
    pub fn with_font(&self, role: FontRole, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fonts.set(role, value);
        next
    }

    pub fn with_spacing(&self, scale: f64) -> Self {
        Self {
            spacing: SpacingTokens::new(scale),
            ..self.clone()
        }
    }

    pub fn with_radius(&self, base: impl Into<String>) -> Self {
        Self {
            border_radius: RadiusTokens::new(base),
            ..self.clone()
        }
    }

    pub fn with_shadow(&self, style: ShadowStyle) -> Self {
        Self {
            shadows: ShadowTokens::new(style),
            ..self.clone()
        }
    }

    /// Generate the style-variable map published for these tokens.
    ///
    /// Keys are variable names without the `--` prefix, in publication order.
    /// The accent color appears twice: once as `accent` and once as the first
    /// chart color. The shadow style is not a variable and is not included.
    ///
    /// # Example
    ///
    /// ```
    /// use expo_theme::PresetCatalog;
    ///
    /// let catalog = PresetCatalog::builtin();
    /// let vars = catalog.get("default").unwrap().to_css_variable_map();
    /// assert_eq!(vars["primary"], "oklch(0.205 0 0)");
    /// assert_eq!(vars["spacing-scale"], "1");
    /// ```
    pub fn to_css_variable_map(&self) -> IndexMap<&'static str, String> {
        let mut vars = IndexMap::with_capacity(8);

        vars.insert("primary", self.colors.primary.clone());
        vars.insert("secondary", self.colors.secondary.clone());
        vars.insert("accent", self.colors.accent.clone());
        vars.insert("chart-1", self.colors.accent.clone());

        vars.insert("font-heading", self.fonts.heading.clone());
        vars.insert("font-body", self.fonts.body.clone());

        vars.insert("spacing-scale", self.spacing.to_css_value());
        vars.insert("radius", self.border_radius.base.clone());

        vars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens() -> DesignTokens {
        DesignTokens {
            colors: ColorTokens {
                primary: "oklch(0.6 0.25 180)".into(),
                secondary: "oklch(0.2 0.1 280)".into(),
                accent: "oklch(0.7 0.3 120)".into(),
                background: "oklch(0.1 0.05 280)".into(),
                foreground: "oklch(0.9 0.1 180)".into(),
            },
            fonts: FontTokens {
                heading: "var(--font-geist-mono)".into(),
                body: "var(--font-geist-sans)".into(),
            },
            spacing: SpacingTokens::new(0.9),
            border_radius: RadiusTokens::new("0.25rem"),
            shadows: ShadowTokens::new(ShadowStyle::Sharp),
        }
    }

    #[test]
    fn variable_map_has_eight_entries_in_order() {
        let vars = tokens().to_css_variable_map();
        let keys: Vec<&str> = vars.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                "primary",
                "secondary",
                "accent",
                "chart-1",
                "font-heading",
                "font-body",
                "spacing-scale",
                "radius",
            ]
        );
    }

    #[test]
    fn accent_feeds_chart_color() {
        let vars = tokens().to_css_variable_map();
        assert_eq!(vars["accent"], "oklch(0.7 0.3 120)");
        assert_eq!(vars["chart-1"], "oklch(0.7 0.3 120)");
    }

    #[test]
    fn background_and_foreground_are_not_published() {
        let vars = tokens().to_css_variable_map();
        assert!(!vars.values().any(|v| v == "oklch(0.1 0.05 280)"));
        assert!(!vars.contains_key("background"));
    }

    #[test]
    fn with_helpers_leave_other_groups_alone() {
        let base = tokens();
        let next = base.with_spacing(1.3).with_shadow(ShadowStyle::None);

        assert_eq!(next.spacing.scale, 1.3);
        assert_eq!(next.shadows.style, ShadowStyle::None);
        assert_eq!(next.colors, base.colors);
        assert_eq!(next.fonts, base.fonts);
        assert_eq!(next.border_radius, base.border_radius);
    }

    #[test]
    fn serialized_shape_uses_page_field_names() {
        let json = serde_json::to_value(tokens()).unwrap();
        assert_eq!(json["borderRadius"]["base"], "0.25rem");
        assert_eq!(json["shadows"]["style"], "sharp");
        assert_eq!(json["spacing"]["scale"], 0.9);
    }
}
