//! Storage report use case

use crate::domain::CapacitySnapshot;
use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

/// Current remaining-capacity estimate for the stash's storage partition.
pub fn storage_report<S: StorageBackend>(store: &EntryStore<S>) -> Result<CapacitySnapshot> {
    store.capacity()
}
