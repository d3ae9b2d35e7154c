//! expo.toml configuration handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use expo_theme::DEFAULT_PRESET;

/// Top-level configuration (expo.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExpoConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which preset to render and where extra presets come from
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preset to seed the store with
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Extra catalog files, relative to the config file
    #[serde(default)]
    pub catalogs: Vec<PathBuf>,
}

fn default_preset() -> String {
    DEFAULT_PRESET.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            catalogs: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Css,
    Json,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl ExpoConfig {
    /// Load configuration from a file or a directory containing expo.toml.
    ///
    /// Catalog paths are resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("expo.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: ExpoConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if let Some(base) = config_path.parent() {
            for catalog in &mut config.theme.catalogs {
                if catalog.is_relative() {
                    *catalog = base.join(&*catalog);
                }
            }
        }

        Ok(config)
    }

    /// Load `./expo.toml` if present, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new("expo.toml").is_file() => Self::load(Path::new("expo.toml")),
            None => Ok(Self::default()),
        }
    }
}
