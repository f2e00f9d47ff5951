//! Config management use case

use crate::error::{Result, VentError};
use crate::infrastructure::{Config, Workspace};

/// Service for managing stash configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "notifications" => Ok(config.notifications.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(VentError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: notifications, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "notifications" => {
                config.notifications = value.parse().map_err(|_| {
                    VentError::Config(format!(
                        "Invalid value for notifications: '{}'. Expected true or false",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(VentError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(VentError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: notifications",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
