// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Default language code for the command-line tool
//! - `[cache]` - Expiry window, storage key prefix and freshness policy
//! - `[http]` - `User-Agent` and base URL for relative document URLs
//!
//! Every section and field is optional; missing values take the constants
//! in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `LOCALIZED_STRINGS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use localized_strings::config::{self, Config};
//! use localized_strings::domain::FreshnessPolicy;
//!
//! let (mut config, _warning) = config::load();
//! config.cache.freshness = FreshnessPolicy::Strict;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::{ExpiryWindow, FreshnessPolicy};
use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the config file exists but cannot be read.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language code loaded when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Persistent cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Days a cached dictionary is trusted (0–365).
    #[serde(default = "default_expiry_days", skip_serializing_if = "Option::is_none")]
    pub expiry_days: Option<u32>,

    /// Namespace prepended to every storage key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<String>,

    /// How the last-refresh timestamp is compared against the clock.
    #[serde(default)]
    pub freshness: FreshnessPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expiry_days: default_expiry_days(),
            key_prefix: None,
            freshness: FreshnessPolicy::default(),
        }
    }
}

impl CacheConfig {
    /// Returns the configured expiry window, clamped to its bounds.
    #[must_use]
    pub fn expiry_window(&self) -> ExpiryWindow {
        ExpiryWindow::from_days(self.expiry_days.unwrap_or(DEFAULT_EXPIRY_DAYS))
    }

    /// Returns the configured key prefix or [`DEFAULT_KEY_PREFIX`].
    #[must_use]
    pub fn key_prefix(&self) -> &str {
        self.key_prefix.as_deref().unwrap_or(DEFAULT_KEY_PREFIX)
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HttpConfig {
    /// `User-Agent` header value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Base URL that relative document URLs are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl HttpConfig {
    /// Returns the configured user agent or [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

#[allow(clippy::unnecessary_wraps)]
fn default_expiry_days() -> Option<u32> {
    Some(DEFAULT_EXPIRY_DAYS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file is not an
/// error; an unreadable or invalid one yields the defaults plus
/// [`CONFIG_LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `<base_dir>/settings.toml`.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to load config");
            (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to `<base_dir>/settings.toml`.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
