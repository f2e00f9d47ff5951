//! The entry model
//!
//! An entry is one saved note: free-form text, optional category labels,
//! and metadata fixed at creation time. Entries are immutable after
//! creation; the only lifecycle transition is wholesale removal.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One saved note.
///
/// Serialized field names match the persisted JSON layout, so existing
/// data written under the `texts` key loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Free-form user content: links, snippets, plain text.
    pub text: String,

    /// Epoch milliseconds at creation. Two entries created within the
    /// same millisecond collide; accepted limitation of the id scheme.
    pub id: i64,

    /// UTF-8 byte length of `text`, computed once at creation and never
    /// recomputed afterwards.
    pub size: u64,

    /// Formatted creation timestamp, fixed at creation.
    #[serde(rename = "createdTime")]
    pub created_time: String,

    /// Ordered user-supplied labels; may be empty, not deduplicated.
    pub categories: Vec<String>,
}

impl Entry {
    /// Build a new entry from its text and categories at the given instant.
    pub fn new(text: String, categories: Vec<String>, created_at: DateTime<Local>) -> Self {
        let size = text.len() as u64;
        Entry {
            id: created_at.timestamp_millis(),
            size,
            created_time: format_created_time(created_at),
            text,
            categories,
        }
    }
}

/// Format a creation instant as `MM/DD/YYYY HH:MM` (zero-padded, 24-hour).
pub fn format_created_time(at: DateTime<Local>) -> String {
    at.format("%m/%d/%Y %H:%M").to_string()
}
