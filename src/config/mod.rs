// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use tariff_slider::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.endpoint = Some("https://example.invalid/tariffs".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::domain::tariff::{Tariff, TariffList};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::{
    DEFAULT_POSITION_FRACTION, DEFAULT_SPEED_UNIT, DEFAULT_TRACK_LENGTH, MAX_MARKER_SIZE,
    MIN_MARKER_SIZE,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TariffSlider";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint the selection notifier posts commits to. `None` disables
    /// network notification entirely.
    pub endpoint: Option<String>,
    /// Unit label rendered under each speed value.
    #[serde(default)]
    pub unit: Option<String>,
    /// Initial handle position as a fraction of the track, snapped to the
    /// nearest tariff.
    #[serde(default)]
    pub default_position: Option<f32>,
    /// Tariff set presented on the track. Falls back to the built-in set
    /// when absent.
    #[serde(default)]
    pub tariffs: Option<Vec<Tariff>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            unit: Some(DEFAULT_SPEED_UNIT.to_string()),
            default_position: Some(DEFAULT_POSITION_FRACTION),
            tariffs: None,
        }
    }
}

impl Config {
    /// Resolves the configured tariff set into a validated list.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::SliderError`] when the configured set is
    /// empty or contains duplicate ids; an invalid config must fail fast
    /// rather than render an undefined track.
    pub fn tariff_list(&self) -> Result<TariffList> {
        let tariffs = self
            .tariffs
            .clone()
            .unwrap_or_else(defaults::default_tariffs);
        Ok(TariffList::new(tariffs)?)
    }

    /// Unit label, falling back to the built-in default.
    #[must_use]
    pub fn unit_label(&self) -> String {
        self.unit
            .clone()
            .unwrap_or_else(|| DEFAULT_SPEED_UNIT.to_string())
    }

    /// Initial handle fraction, falling back to the built-in default.
    #[must_use]
    pub fn initial_fraction(&self) -> f32 {
        self.default_position.unwrap_or(DEFAULT_POSITION_FRACTION)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
