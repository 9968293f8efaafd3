//! Configuration file support for rodeps.
//!
//! Provides YAML-based configuration through `rodeps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::application::dto::{FlagSet, DEFAULT_QUERY_TIMEOUT};
use crate::shared::error::RodepsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "rodeps.config.yml";

/// Upper bound for `timeout_secs` (10 minutes)
const MAX_TIMEOUT_SECS: u64 = 600;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub long: Option<bool>,
    pub json: Option<bool>,
    pub verbose: Option<bool>,
    /// Per-query timeout for the npm commands, in seconds
    pub timeout_secs: Option<u64>,
    /// Package-manager binary to run instead of the platform default
    pub npm_command: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Flags switched on by the config file
    pub fn flags(&self) -> FlagSet {
        FlagSet::new(
            self.long.unwrap_or(false),
            self.verbose.unwrap_or(false),
            self.json.unwrap_or(false),
        )
    }

    pub fn query_timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_QUERY_TIMEOUT)
    }

    pub fn npm_command(&self) -> Option<&str> {
        self.npm_command.as_deref()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(secs) = config.timeout_secs {
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(RodepsError::InvalidConfig {
                message: format!(
                    "timeout_secs must be between 1 and {}, got {}.",
                    MAX_TIMEOUT_SECS, secs
                ),
                hint: format!(
                    "Remove timeout_secs to use the default of {}s.",
                    DEFAULT_QUERY_TIMEOUT.as_secs()
                ),
            }
            .into());
        }
    }

    if let Some(ref command) = config.npm_command {
        if command.trim().is_empty() {
            return Err(RodepsError::InvalidConfig {
                message: "npm_command must not be empty.".to_string(),
                hint: "Set npm_command to a binary name or path (e.g., \"npm\"), or remove it."
                    .to_string(),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
