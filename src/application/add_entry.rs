//! Add entry use case

use crate::domain::{CapacitySnapshot, Entry};
use crate::error::{Result, VentError};
use crate::infrastructure::{EntryStore, StorageBackend};

use super::Notifier;

/// Outcome of a successful add: the saved entry and the post-save
/// capacity snapshot.
pub struct AddReport {
    pub entry: Entry,
    pub capacity: CapacitySnapshot,
}

/// Service for saving a new entry
pub struct AddEntryService<S: StorageBackend, N: Notifier> {
    store: EntryStore<S>,
    notifier: N,
}

impl<S: StorageBackend, N: Notifier> AddEntryService<S, N> {
    pub fn new(store: EntryStore<S>, notifier: N) -> Self {
        AddEntryService { store, notifier }
    }

    /// Save a new entry, then recompute capacity and notify.
    pub fn execute(&self, text: &str, categories: Vec<String>) -> Result<AddReport> {
        let entries = self.store.create(text, categories)?;
        let capacity = self.store.capacity()?;

        self.notifier
            .notify("Success!", "Your entry has been saved.");

        let entry = entries
            .into_iter()
            .next_back()
            .ok_or_else(|| VentError::StorageWrite("collection empty after save".to_string()))?;

        Ok(AddReport { entry, capacity })
    }
}
