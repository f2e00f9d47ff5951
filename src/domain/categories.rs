//! Derived category index
//!
//! Recomputed from the full collection whenever it changes; never
//! persisted. Used to populate the category filter.

use crate::domain::Entry;
use std::collections::BTreeSet;

/// Collect the distinct category labels across all entries, sorted.
pub fn collect_categories(entries: &[Entry]) -> Vec<String> {
    let mut categories = BTreeSet::new();
    for entry in entries {
        for category in &entry.categories {
            categories.insert(category.clone());
        }
    }
    categories.into_iter().collect()
}
