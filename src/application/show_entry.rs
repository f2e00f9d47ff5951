//! Show entry use case

use crate::domain::Entry;
use crate::error::{Result, VentError};
use crate::infrastructure::{EntryStore, StorageBackend};

/// Look up a single entry by id for inspection.
pub fn show_entry<S: StorageBackend>(store: &EntryStore<S>, id: i64) -> Result<Entry> {
    store
        .load()?
        .into_iter()
        .find(|entry| entry.id == id)
        .ok_or(VentError::EntryNotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStorage;

    #[test]
    fn test_show_existing_entry() {
        let store = EntryStore::new(MemoryStorage::new());
        let entries = store.create("find me", vec![]).unwrap();

        let entry = show_entry(&store, entries[0].id).unwrap();
        assert_eq!(entry.text, "find me");
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let store = EntryStore::new(MemoryStorage::new());

        let result = show_entry(&store, 42);
        assert!(matches!(result, Err(VentError::EntryNotFound(42))));
    }
}
