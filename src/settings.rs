//! User settings persistence.
//!
//! This module handles loading and saving the analysis parameters, CSV
//! options and report options across sessions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::AsRefStr;
use thiserror::Error;

use crate::parsers::CsvOptions;
use crate::session::AnalysisParams;

/// Errors raised while saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Parameter defaults of the two front-ends
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, AsRefStr, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// Whole file, narrow base window
    #[default]
    Cli,
    /// Fixed A/B/C cut points, wider base window
    Gui,
}

impl Preset {
    pub fn params(&self) -> AnalysisParams {
        match self {
            Preset::Cli => AnalysisParams {
                delta: 0.2,
                numnei: 5,
                a: 0.0,
                b: 0.0,
                c: 0.0,
            },
            Preset::Gui => AnalysisParams {
                delta: 0.2,
                numnei: 10,
                a: 50.0,
                b: 500.0,
                c: 1500.0,
            },
        }
    }
}

/// Where and whether peak reports are written as CSV
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub write_csv: bool,
    pub output_dir: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            write_csv: true,
            output_dir: PathBuf::from("output"),
        }
    }
}

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Last used analysis parameters
    #[serde(default)]
    pub params: AnalysisParams,
    #[serde(default)]
    pub csv: CsvOptions,
    #[serde(default)]
    pub report: ReportOptions,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            params: AnalysisParams::default(),
            csv: CsvOptions::default(),
            report: ReportOptions::default(),
        }
    }
}

impl UserSettings {
    /// Settings seeded from a preset instead of the stored parameters
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            params: preset.params(),
            ..Default::default()
        }
    }

    /// Get the config directory path for PeakFinder
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("PeakFinder"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("PeakFinder"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("peakfinder"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Ignoring corrupt settings file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::get_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }
}
