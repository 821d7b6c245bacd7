//! User-level configuration loaded from `~/.tasktags/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values.

use crate::logging::{parse_level, parse_rotation, LogConfig};
use crate::utils::{get_tasktags_dir, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(Box<toml::de::Error>),

    #[error("notify.capacity must be at least 1")]
    InvalidCapacity,
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(Box::new(err))
    }
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

/// Logging settings (`[logging]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// `daily`, `hourly` or `never`.
    #[serde(default = "default_rotation")]
    pub rotation: String,
    /// Overrides `~/.tasktags/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}

impl LoggingSettings {
    /// Resolve these settings into a [`LogConfig`]
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        let defaults = LogConfig::default();
        LogConfig {
            log_dir: self.dir.clone().unwrap_or(defaults.log_dir),
            log_level: parse_level(&self.level),
            json_format: self.json,
            rotation: parse_rotation(&self.rotation),
        }
    }
}

fn default_capacity() -> usize {
    crate::tag::DEFAULT_CHANGE_CAPACITY.get()
}

/// Change-notification settings (`[notify]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Undelivered changes buffered per tag set before subscribers lag.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl NotifyConfig {
    /// The configured capacity, for `TagSet::with_change_capacity`.
    pub fn change_capacity(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.capacity).ok_or(ConfigError::InvalidCapacity)
    }
}

/// Top-level user configuration, deserialized from
/// `~/.tasktags/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub notify: NotifyConfig,
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

/// Resolve the canonical path for the user config file (`~/.tasktags/config.toml`).
///
/// Sits next to the default `logs/` directory.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    get_tasktags_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Parse and validate config TOML.
pub fn parse_user_config(content: &str) -> Result<UserConfig, ConfigError> {
    let config: UserConfig = toml::from_str(content)?;
    config.notify.change_capacity()?;
    Ok(config)
}

/// Load the user configuration from an explicit path.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist.
pub fn load_user_config_from(path: &Path) -> Result<UserConfig, ConfigError> {
    if !path.exists() {
        debug!(
            "User config not found at {}; using defaults",
            path.display()
        );
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_user_config(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

/// Load the user configuration from `~/.tasktags/config.toml`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist so callers
/// never need to handle the "absent file" case specially.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, parsed or
/// validated.
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    let Some(path) = user_config_path() else {
        warn!("Could not determine user config directory; using defaults");
        return Ok(UserConfig::default());
    };
    load_user_config_from(&path)
}

#[cfg(test)]
#[path = "user_config_tests.rs"]
mod user_config_tests;
