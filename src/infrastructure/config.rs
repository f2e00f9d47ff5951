//! Configuration management

use crate::error::{Result, VentError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether to print the post-save/post-delete notifications.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    pub created: DateTime<Utc>,
}

fn default_notifications() -> bool {
    true
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            notifications: true,
            created: Utc::now(),
        }
    }

    /// Load config from .vent/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".vent").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VentError::NotVentDirectory(path.to_path_buf())
            } else {
                VentError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .vent/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let vent_dir = path.join(".vent");
        let config_path = vent_dir.join("config.toml");

        if !vent_dir.exists() {
            fs::create_dir(&vent_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
