//! List categories use case

use crate::domain::categories::collect_categories;
use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

/// List the distinct category labels across all saved entries, sorted.
pub fn list_categories<S: StorageBackend>(store: &EntryStore<S>) -> Result<Vec<String>> {
    Ok(collect_categories(&store.load()?))
}
