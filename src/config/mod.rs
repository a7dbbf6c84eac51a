//! This module handles the viewer's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use image_lens::config::{self, Config};
//! use image_lens::state::FitMode;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fit_mode = Some(FitMode::Contain);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::scaler::Quality;
use crate::state::FitMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM, DEFAULT_ZOOM_STEP};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ImageLens";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fit_mode: Option<FitMode>,
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default)]
    pub min_zoom: Option<f64>,
    #[serde(default)]
    pub max_zoom: Option<f64>,
    #[serde(default)]
    pub zoom_step: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fit_mode: Some(FitMode::Cover),
            quality: Some(Quality::Fast),
            min_zoom: Some(DEFAULT_MIN_ZOOM),
            max_zoom: Some(DEFAULT_MAX_ZOOM),
            zoom_step: Some(DEFAULT_ZOOM_STEP),
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
