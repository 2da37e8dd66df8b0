//! Configuration file management
//!
//! Loads TOML configuration files and provides generator settings.
//! Default config path: ~/.config/icongen/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Generator settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,
    /// Metadata source URL overrides
    pub sources: SourcesConfig,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the artifact pairs are written into
    pub dir: String,
}

/// Metadata source URLs, one per family
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Font Awesome icons.json
    pub awesome: String,
    /// Bootstrap bootstrap-icons.json
    pub bootstrap: String,
    /// Directory URL holding the Material .codepoints files
    pub material_base: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            awesome:
                "https://raw.githubusercontent.com/FortAwesome/Font-Awesome/master/metadata/icons.json"
                    .to_string(),
            bootstrap:
                "https://raw.githubusercontent.com/twbs/icons/main/font/bootstrap-icons.json"
                    .to_string(),
            material_base:
                "https://raw.githubusercontent.com/google/material-design-icons/master/font"
                    .to_string(),
        }
    }
}

impl Config {
    /// Load configuration with priority:
    /// 1. ICONGEN_CONFIG environment variable
    /// 2. ~/.config/icongen/config.toml (user config)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ICONGEN_CONFIG") {
            return Some(PathBuf::from(path));
        }
        let path = dirs::config_dir()?.join("icongen").join("config.toml");
        path.exists().then_some(path)
    }

    /// Load settings from specified path
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// URL of one Material variant's .codepoints file
    pub fn material_url(&self, suffix: &str) -> String {
        format!(
            "{}/MaterialIcons{}-Regular.codepoints",
            self.sources.material_base, suffix
        )
    }
}
