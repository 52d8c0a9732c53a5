//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.limbah/config.toml`.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global limbah configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Label generation preferences
    #[serde(default)]
    pub label: LabelConfig,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the workflow API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Label generation preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Default output size ("800x480", "1200x720", "1600x960")
    #[serde(default = "default_label_size")]
    pub default_size: String,
    /// Directory PNG files are written to (None = current directory)
    #[serde(default)]
    pub output_dir: Option<String>,
}

fn default_label_size() -> String {
    "800x480".to_string()
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            default_size: default_label_size(),
            output_dir: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config directory path
    #[must_use]
    pub fn config_dir() -> PathBuf {
        paths::global_config_dir()
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_path();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Set a config value by dotted key, returns false for unknown keys
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "api.base-url" => {
                self.api.base_url = value.trim_end_matches('/').to_string();
                true
            },
            "label.default-size" => {
                self.label.default_size = value.to_string();
                true
            },
            "label.output-dir" => {
                self.label.output_dir = Some(value.to_string());
                true
            },
            _ => false,
        }
    }
}
