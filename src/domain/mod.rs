//! Domain layer - Business logic and domain models

pub mod capacity;
pub mod categories;
pub mod entry;
pub mod filter;

pub use capacity::{CapacitySnapshot, TOTAL_CAPACITY_BYTES};
pub use entry::Entry;
pub use filter::filter_entries;
