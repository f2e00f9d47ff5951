//! List entries use case

use crate::domain::{filter_entries, Entry};
use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

/// List entries with optional text query, category filter, and limit.
pub fn list_entries<S: StorageBackend>(
    store: &EntryStore<S>,
    query: &str,
    category: &str,
    limit: Option<usize>,
) -> Result<Vec<Entry>> {
    let entries = store.load()?;
    let mut filtered: Vec<Entry> = filter_entries(&entries, query, category)
        .into_iter()
        .cloned()
        .collect();

    if let Some(n) = limit {
        filtered.truncate(n);
    }

    Ok(filtered)
}
