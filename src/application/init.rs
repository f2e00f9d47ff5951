//! Initialize stash use case

use crate::error::Result;
use crate::infrastructure::{Config, Workspace};
use std::fs;
use std::path::Path;

/// Initialize a new stash at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::new(path.to_path_buf());

    // Create .vent directory and the storage partition
    workspace.initialize()?;

    // Save default config
    workspace.save_config(&Config::new())?;

    println!("Initialized vent stash at {}", path.display());

    Ok(())
}
