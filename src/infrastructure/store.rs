//! The entry store
//!
//! Owns the persisted collection of entries under a single well-known key.
//! Every mutation is a whole-collection read-modify-write: load the array,
//! change it in memory, write it back. There is no partial state; after a
//! successful mutation the persisted collection equals the returned one.

use crate::domain::{CapacitySnapshot, Entry};
use crate::error::{Result, VentError};
use crate::infrastructure::StorageBackend;
use chrono::Local;

/// Storage key holding the serialized entry collection.
pub const STORAGE_KEY: &str = "texts";

/// Authoritative collection of entries over an injected storage backend.
pub struct EntryStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        EntryStore { backend }
    }

    /// Load the persisted collection.
    ///
    /// A missing key yields an empty collection. So does a value that
    /// fails to parse: malformed data is logged and ignored rather than
    /// failing the whole session.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let Some(raw) = self.backend.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                eprintln!("Warning: ignoring malformed entry data: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Create a new entry and append it to the collection.
    ///
    /// `text` must be non-empty after trimming but is stored as given.
    /// Returns the updated collection. A failed write propagates as
    /// `StorageWrite` and leaves the persisted state untouched.
    pub fn create(&self, text: &str, categories: Vec<String>) -> Result<Vec<Entry>> {
        if text.trim().is_empty() {
            return Err(VentError::EmptyText);
        }

        let mut entries = self.load()?;
        entries.push(Entry::new(text.to_string(), categories, Local::now()));
        self.persist(&entries)?;
        Ok(entries)
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Deleting an unknown id is a no-op, not an error. Returns the
    /// updated collection.
    pub fn delete(&self, id: i64) -> Result<Vec<Entry>> {
        let mut entries = self.load()?;
        entries.retain(|entry| entry.id != id);
        self.persist(&entries)?;
        Ok(entries)
    }

    /// Current capacity estimate for the whole storage partition.
    pub fn capacity(&self) -> Result<CapacitySnapshot> {
        Ok(CapacitySnapshot::from_usage(self.backend.estimate_usage()?))
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.backend.set(STORAGE_KEY, &raw)
    }
}
