use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown design preset `{0}`")]
    UnknownPreset(String),

    #[error("design preset `{0}` is already in the catalog")]
    DuplicatePreset(String),

    #[error("unknown shadow style `{0}` (expected soft, sharp, or none)")]
    UnknownShadowStyle(String),

    #[error("failed to parse preset catalog")]
    Catalog(#[from] toml::de::Error),

    #[error("failed to read preset catalog: {path}")]
    ReadCatalog { path: PathBuf, source: io::Error },
}
