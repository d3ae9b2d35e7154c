//! Font tokens for theming

use serde::{Deserialize, Serialize};

/// Font roles for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontRole {
    Heading,
    Body,
}

impl FontRole {
    pub fn id(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Body => "body",
        }
    }
}

/// Heading and body font references
///
/// Each value is a font-family expression, typically a reference to a
/// variable the page already defines (`var(--font-geist-sans)`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontTokens {
    pub heading: String,
    pub body: String,
}

impl FontTokens {
    pub fn get(&self, role: FontRole) -> &str {
        match role {
            FontRole::Heading => &self.heading,
            FontRole::Body => &self.body,
        }
    }

    pub fn set(&mut self, role: FontRole, value: impl Into<String>) {
        match role {
            FontRole::Heading => self.heading = value.into(),
            FontRole::Body => self.body = value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_to_fields() {
        let mut fonts = FontTokens {
            heading: "var(--font-geist-sans)".into(),
            body: "var(--font-geist-sans)".into(),
        };
        fonts.set(FontRole::Heading, "var(--font-geist-mono)");

        assert_eq!(FontRole::Heading.id(), "heading");
        assert_eq!(FontRole::Body.id(), "body");
        assert_eq!(fonts.get(FontRole::Heading), "var(--font-geist-mono)");
        assert_eq!(fonts.get(FontRole::Body), "var(--font-geist-sans)");
    }
}
