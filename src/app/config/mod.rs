// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Startup language and theme mode
//! - `[backend]` - Hosted backend URL and anon key
//!
//! `MAJLIS_SUPABASE_URL` / `MAJLIS_SUPABASE_ANON_KEY` override the backend
//! section. The language is only a startup default: switching languages in
//! the UI is never written back.
//!
//! # Examples
//!
//! ```no_run
//! use majlis::app::config;
//!
//! let (config, _warning) = config::load();
//! let backend = config.backend.with_env_overrides();
//! if let Some((url, key)) = backend.resolve() {
//!     println!("backend at {url} ({} byte key)", key.len());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Startup language code ("en", "ar", "ar-EG", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Connection settings for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Public anon key of the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anon_key: Option<String>,
}

impl BackendConfig {
    /// Applies `MAJLIS_SUPABASE_URL` / `MAJLIS_SUPABASE_ANON_KEY`.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(ENV_SUPABASE_URL).ok(),
            std::env::var(ENV_SUPABASE_ANON_KEY).ok(),
        )
    }

    /// Replaces fields with the given non-empty values.
    #[must_use]
    pub fn with_overrides(self, url: Option<String>, anon_key: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            url: non_empty(url).or(self.url),
            anon_key: non_empty(anon_key).or(self.anon_key),
        }
    }

    /// `(url, anon_key)` when both are set and non-blank.
    #[must_use]
    pub fn resolve(&self) -> Option<(String, String)> {
        let url = self.url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let key = self
            .anon_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((url.to_string(), key.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

fn default_theme_mode() -> ThemeMode {
    DEFAULT_THEME_MODE
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, optional_warning)`. A missing file gives defaults
/// silently; an unreadable one gives defaults plus an i18n warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    match get_config_path_with_override(None) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
