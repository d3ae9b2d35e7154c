//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Base border radius, as a length expression (`0.625rem`, `0`, ...)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub base: String,
}

impl RadiusTokens {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}
