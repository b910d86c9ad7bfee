// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use keepsake::config::{self, Config};
//!
//! // Load existing configuration
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.language = Some("tr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Keepsake";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `tr`, `en-US`).
    pub language: Option<String>,
    /// Directory scanned for the photo catalog.
    #[serde(default)]
    pub photo_dir: Option<PathBuf>,
    /// Light/dark/system theme preference.
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            photo_dir: None,
            theme_mode: ThemeMode::System,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults when the file is
/// missing or unparseable. A fallback due to a bad file is reported as an
/// i18n warning key so the UI can surface it.
pub fn load() -> (Config, Option<&'static str>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some("warning-config-unreadable")),
            };
        }
    }
    (Config::default(), None)
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
