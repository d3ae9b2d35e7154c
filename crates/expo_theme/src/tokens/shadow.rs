//! Shadow tokens for theming

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ThemeError;

/// Shadow treatment the page's style rules switch on
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowStyle {
    #[default]
    Soft,
    Sharp,
    None,
}

impl ShadowStyle {
    pub const ALL: [ShadowStyle; 3] = [ShadowStyle::Soft, ShadowStyle::Sharp, ShadowStyle::None];

    /// Attribute value, as matched by `[data-shadow-style=...]` rules.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soft => "soft",
            Self::Sharp => "sharp",
            Self::None => "none",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Soft => "Soft",
            Self::Sharp => "Sharp",
            Self::None => "None",
        }
    }
}

impl Display for ShadowStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadowStyle {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownShadowStyle(s.to_string()))
    }
}

/// Shadow token group
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub style: ShadowStyle,
}

impl ShadowTokens {
    pub fn new(style: ShadowStyle) -> Self {
        Self { style }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_style() {
        for style in ShadowStyle::ALL {
            assert_eq!(style.as_str().parse::<ShadowStyle>().unwrap(), style);
        }
    }

    #[test]
    fn rejects_unknown_style() {
        let err = "glow".parse::<ShadowStyle>().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownShadowStyle(ref s) if s == "glow"));
    }

    #[test]
    fn display_names_are_capitalized() {
        let names: Vec<&str> = ShadowStyle::ALL.iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["Soft", "Sharp", "None"]);
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Soft".parse::<ShadowStyle>().is_err());
    }
}
