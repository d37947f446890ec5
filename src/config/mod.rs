//! This module handles the crate's configuration, including loading and saving
//! controller settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Settings};
//!
//! // Load existing settings
//! let mut settings = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! settings.duration_ms = Some(5000);
//!
//! // Save the modified settings
//! config::save(&settings).expect("Failed to save settings");
//! ```

pub mod defaults;

use crate::error::Result;
use crate::notifications::ToastPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use defaults::{
    DEFAULT_ANIMATION_MS, DEFAULT_DURATION_MS, MAX_ANIMATION_MS, MIN_ANIMATION_MS,
};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

/// Controller settings, persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display duration before auto-hide, in milliseconds. `0` means toasts
    /// stay until explicitly dismissed.
    pub duration_ms: Option<u64>,
    /// Entry/exit transition duration, in milliseconds.
    #[serde(default)]
    pub animation_ms: Option<u64>,
    /// Screen placement of the toast overlay.
    #[serde(default)]
    pub position: Option<ToastPosition>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration_ms: Some(DEFAULT_DURATION_MS),
            animation_ms: Some(DEFAULT_ANIMATION_MS),
            position: Some(ToastPosition::default()),
        }
    }
}

impl Settings {
    /// The default display duration, `None` when configured to never
    /// auto-hide (`duration_ms = 0`).
    #[must_use]
    pub fn effective_duration(&self) -> Option<Duration> {
        match self.duration_ms.unwrap_or(DEFAULT_DURATION_MS) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// The transition duration, clamped to sane bounds.
    #[must_use]
    pub fn effective_animation(&self) -> Duration {
        let ms = self
            .animation_ms
            .unwrap_or(DEFAULT_ANIMATION_MS)
            .clamp(MIN_ANIMATION_MS, MAX_ANIMATION_MS);
        Duration::from_millis(ms)
    }

    /// The overlay placement.
    #[must_use]
    pub fn effective_position(&self) -> ToastPosition {
        self.position.unwrap_or_default()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Settings> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Settings::default())
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let settings = Settings {
            duration_ms: Some(5000),
            animation_ms: Some(200),
            position: Some(ToastPosition::TopRight),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&settings, &config_path).expect("failed to save settings");
        let loaded = load_from_path(&config_path).expect("failed to load settings");

        assert_eq!(loaded.duration_ms, settings.duration_ms);
        assert_eq!(loaded.animation_ms, settings.animation_ms);
        assert_eq!(loaded.position, settings.position);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.duration_ms, Some(DEFAULT_DURATION_MS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Settings::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn zero_duration_means_never_auto_hide() {
        let settings = Settings {
            duration_ms: Some(0),
            ..Settings::default()
        };
        assert_eq!(settings.effective_duration(), None);
    }

    #[test]
    fn animation_is_clamped_to_bounds() {
        let too_slow = Settings {
            animation_ms: Some(60_000),
            ..Settings::default()
        };
        assert_eq!(
            too_slow.effective_animation(),
            Duration::from_millis(MAX_ANIMATION_MS)
        );

        let too_fast = Settings {
            animation_ms: Some(1),
            ..Settings::default()
        };
        assert_eq!(
            too_fast.effective_animation(),
            Duration::from_millis(MIN_ANIMATION_MS)
        );
    }
}
