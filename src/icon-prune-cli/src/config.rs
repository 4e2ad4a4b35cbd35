//! Configuration management for icon-prune CLI

use anyhow::{Context, Result};
use icon_prune::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional overrides for the built-in URLs and folders
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_destination: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_source: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_destination: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("icon-prune");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or use defaults if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Config with every field set to the built-in value
    pub fn from_settings(settings: Settings) -> Self {
        Config {
            avatar_url: Some(settings.avatar_url),
            material_url: Some(settings.material_url),
            emotion_url: Some(settings.emotion_url),
            item_source: Some(settings.item_source),
            item_destination: Some(settings.item_destination),
            emotion_source: Some(settings.emotion_source),
            emotion_destination: Some(settings.emotion_destination),
            manifest_path: Some(settings.manifest_path),
        }
    }

    /// Effective settings: configured values over the built-in defaults
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            avatar_url: self.avatar_url.clone().unwrap_or(defaults.avatar_url),
            material_url: self.material_url.clone().unwrap_or(defaults.material_url),
            emotion_url: self.emotion_url.clone().unwrap_or(defaults.emotion_url),
            item_source: self.item_source.clone().unwrap_or(defaults.item_source),
            item_destination: self
                .item_destination
                .clone()
                .unwrap_or(defaults.item_destination),
            emotion_source: self.emotion_source.clone().unwrap_or(defaults.emotion_source),
            emotion_destination: self
                .emotion_destination
                .clone()
                .unwrap_or(defaults.emotion_destination),
            manifest_path: self.manifest_path.clone().unwrap_or(defaults.manifest_path),
        }
    }
}

/// An explicit value, or the configured one; the file is only read when needed
pub fn or_configured<T>(value: Option<T>, pick: impl FnOnce(Settings) -> T) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Ok(pick(Config::load()?.settings())),
    }
}
