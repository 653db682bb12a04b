//! Expansion configuration, loaded from `config.toml`.

use std::path::Path;

use serde::Deserialize;

use crate::error::ExpansionError;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Top-level config file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExpansionConfig {
    #[serde(default)]
    pub booleans: BooleanConfig,
}

/// Text used for boolean placeholder results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BooleanConfig {
    #[serde(rename = "true", default = "default_true")]
    pub true_token: String,
    #[serde(rename = "false", default = "default_false")]
    pub false_token: String,
}

fn default_true() -> String {
    "yes".into()
}

fn default_false() -> String {
    "no".into()
}

impl Default for BooleanConfig {
    fn default() -> Self {
        Self {
            true_token: default_true(),
            false_token: default_false(),
        }
    }
}

impl BooleanConfig {
    pub fn token(&self, value: bool) -> &str {
        if value {
            &self.true_token
        } else {
            &self.false_token
        }
    }
}

impl ExpansionConfig {
    /// Load config from a TOML file, writing the bundled default first if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ExpansionError> {
        if path.exists() {
            let text = std::fs::read_to_string(path).map_err(|source| ExpansionError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&text)
        } else {
            let write_err = |source| ExpansionError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            };
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
            std::fs::write(path, DEFAULT_CONFIG).map_err(write_err)?;
            log::info!("worldguard: Created default config at {path:?}");
            Self::from_toml(DEFAULT_CONFIG)
        }
    }

    pub fn from_toml(text: &str) -> Result<Self, ExpansionError> {
        Ok(toml::from_str(text)?)
    }
}
