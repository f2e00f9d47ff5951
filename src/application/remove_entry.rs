//! Remove entry use case

use crate::domain::CapacitySnapshot;
use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

use super::Notifier;

/// Outcome of a delete attempt. Deleting an unknown id is a no-op, so
/// `removed` reports whether anything actually went away.
pub struct RemoveReport {
    pub removed: bool,
    pub capacity: CapacitySnapshot,
}

/// Service for deleting an entry
pub struct RemoveEntryService<S: StorageBackend, N: Notifier> {
    store: EntryStore<S>,
    notifier: N,
}

impl<S: StorageBackend, N: Notifier> RemoveEntryService<S, N> {
    pub fn new(store: EntryStore<S>, notifier: N) -> Self {
        RemoveEntryService { store, notifier }
    }

    /// Delete the entry with the given id, then recompute capacity.
    /// Notifies only when an entry was actually removed.
    pub fn execute(&self, id: i64) -> Result<RemoveReport> {
        let before = self.store.load()?.len();
        let entries = self.store.delete(id)?;
        let removed = entries.len() < before;
        let capacity = self.store.capacity()?;

        if removed {
            self.notifier
                .notify("Attention!", "Your entry has been deleted.");
        }

        Ok(RemoveReport { removed, capacity })
    }
}
