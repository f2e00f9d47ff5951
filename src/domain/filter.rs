//! Pure entry filtering
//!
//! Both filters are conjunctive: an entry survives only if it passes the
//! text query AND the category selection. An empty argument disables that
//! filter, so `filter_entries(entries, "", "")` is the identity.

use crate::domain::Entry;

/// Filter entries by a case-insensitive text query and an exact category
/// match. Input order is preserved; the input is never mutated.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &str, category: &str) -> Vec<&'a Entry> {
    let query_lower = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| matches(entry, &query_lower, category))
        .collect()
}

fn matches(entry: &Entry, query_lower: &str, category: &str) -> bool {
    if !query_lower.is_empty() && !entry.text.to_lowercase().contains(query_lower) {
        return false;
    }
    // Category matching is exact and case-sensitive, unlike the text query.
    if !category.is_empty() && !entry.categories.iter().any(|c| c == category) {
        return false;
    }
    true
}
