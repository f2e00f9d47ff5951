//! Error types for vent

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the vent application
#[derive(Debug, Error)]
pub enum VentError {
    #[error("Not a vent directory: {0}")]
    NotVentDirectory(PathBuf),

    #[error("Entry text cannot be empty")]
    EmptyText,

    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VentError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VentError::NotVentDirectory(_) => 2,
            VentError::EmptyText => 3,
            VentError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            VentError::NotVentDirectory(path) => {
                format!(
                    "Not a vent directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'vent init' in this directory to create a new stash\n\
                    • Navigate to an existing vent directory\n\
                    • Set VENT_ROOT environment variable to your stash path",
                    path.display()
                )
            }
            VentError::EmptyText => "Entry text cannot be empty\n\n\
                Suggestions:\n\
                • Pass the text as the first argument: vent add \"Buy milk\"\n\
                • Anything goes: links, snippets, plain text"
                .to_string(),
            VentError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'vent list' to see saved entries and their ids\n\
                    • The entry may already have been deleted",
                    id
                )
            }
            VentError::StorageWrite(msg) => {
                format!(
                    "Storage write failed: {}\n\n\
                    Suggestions:\n\
                    • Run 'vent storage' to check remaining capacity\n\
                    • Delete entries you no longer need: vent delete <id>\n\
                    • Your saved entries are unchanged; retry the action",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using VentError
pub type Result<T> = std::result::Result<T, VentError>;
