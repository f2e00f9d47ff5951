//! Stash workspace discovery and layout
//!
//! A stash root is any directory containing `.vent/`. The storage
//! partition lives at `.vent/storage/`, configuration at
//! `.vent/config.toml`.

use crate::error::{Result, VentError};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to a stash root directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace with the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover the stash root by walking up from the current directory.
    /// First checks the VENT_ROOT environment variable, then falls back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("VENT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_vent_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(VentError::Config(format!(
                    "VENT_ROOT is set to '{}' but no .vent directory found. \
                    Run 'vent init' in that directory or unset VENT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the stash root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_vent_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .vent
                    return Err(VentError::NotVentDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_vent_dir(path: &Path) -> bool {
        path.join(".vent").is_dir()
    }

    /// Check if this root has been initialized
    pub fn is_initialized(&self) -> bool {
        Self::has_vent_dir(&self.root)
    }

    /// Create the `.vent` directory structure, including the storage partition.
    pub fn initialize(&self) -> Result<()> {
        let vent_dir = self.root.join(".vent");

        if vent_dir.exists() {
            return Err(VentError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&vent_dir)?;
        fs::create_dir(vent_dir.join("storage"))?;
        Ok(())
    }

    /// The storage partition backing this stash.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.root.join(".vent").join("storage"))
    }

    /// Load configuration from .vent/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .vent/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}
