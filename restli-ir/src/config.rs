//! Configuration management.
//!
//! This module handles loading translation settings from `restli-ir.toml`
//! files. Every section and key is optional and falls back to its default.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "restli-ir.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Translation behavior.
    pub translation: TranslationConfig,

    /// Synthesized naming.
    pub naming: NamingConfig,
}

/// Translation behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Skip named schemas already parsed in this run.
    pub skip_visited: bool,
}

/// Synthesized naming.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Appended to the exported resource name to name a complex key.
    pub complex_key_suffix: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self { skip_visited: true }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            complex_key_suffix: "ComplexKey".to_string(),
        }
    }
}

/// Configuration manager for loading configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// With no path, reads `restli-ir.toml` from the working directory if it
    /// exists and otherwise returns the defaults. An explicit path that does
    /// not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::not_found(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILENAME);
                if !default_path.exists() {
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| ConfigError::invalid_toml(config_path, e.to_string()))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# restli-ir configuration file

[translation]
# Skip named schemas that were already parsed earlier in the same run
skip_visited = true

[naming]
# Suffix of synthesized complex-key names (e.g. Widgets_ComplexKey)
complex_key_suffix = "ComplexKey"
"#
    }
}
