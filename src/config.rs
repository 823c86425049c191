//! Settings persistence
//!
//! Stores user preferences in `~/.config/vimrc-loader/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Directive file path used when none is configured
pub const DEFAULT_VIMRC_PATH: &str = ".vimrc";

/// Settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directive file path, relative to the workspace root
    #[serde(default = "default_vimrc_path")]
    pub vimrc_path: String,
}

fn default_vimrc_path() -> String {
    DEFAULT_VIMRC_PATH.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vimrc_path: default_vimrc_path(),
        }
    }
}

impl Settings {
    /// Load settings from the user config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        Self::load_from(&path)
    }

    /// Load settings from `path`, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Settings>(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings.normalized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// An empty path falls back to the default
    fn normalized(mut self) -> Self {
        if self.vimrc_path.trim().is_empty() {
            self.vimrc_path = default_vimrc_path();
        }
        self
    }

    /// Save settings to the user config dir
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        self.save_to(&path)
    }

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update the directive path and save to `path`
    pub fn set_vimrc_path(&mut self, vimrc_path: &str, path: &Path) -> Result<(), String> {
        let trimmed = vimrc_path.trim();
        if trimmed.is_empty() {
            return Err("Directive file path cannot be empty".to_string());
        }
        self.vimrc_path = trimmed.to_string();
        self.save_to(path)
    }
}
