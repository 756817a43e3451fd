//! Configuration file loading for apirules.
//!
//! Reads `.apirules/apirules.json` and provides typed access to all settings.
//! Falls back to sensible defaults when the config file is missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level apirules configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRulesConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub rules: RulesConfig,
    /// Accepted violations, as `rule,package,type,field` report keys.
    #[serde(default)]
    pub exceptions: Vec<String>,
}

/// Errors from loading an explicitly requested config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Per-rule toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_true")]
    pub list_type_missing: bool,
}

fn default_true() -> bool {
    true
}
fn default_version() -> String {
    "0.1.0".to_string()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            list_type_missing: true,
        }
    }
}

impl Default for ApiRulesConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: RulesConfig::default(),
            exceptions: vec![],
        }
    }
}

impl RulesConfig {
    /// Whether the rule with the given name is enabled. Unknown rules are on.
    pub fn is_enabled(&self, rule: &str) -> bool {
        match rule {
            "list_type_missing" => self.list_type_missing,
            _ => true,
        }
    }
}

impl ApiRulesConfig {
    /// Load configuration from `apirules.json` inside the given config directory.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join("apirules.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "apirules: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load an explicitly named config file. Unlike [`load`](Self::load),
    /// a missing or malformed file is an error.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
