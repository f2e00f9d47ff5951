//! Storage capacity accounting
//!
//! The host store exposes no quota API, so capacity is an estimate against
//! an assumed fixed budget. Values are modeled as costing two bytes per
//! character, matching the fixed-width internal encoding of the storage
//! layer this scheme was inherited from.

/// Assumed total capacity of the storage partition.
pub const TOTAL_CAPACITY_BYTES: u64 = 5 * 1024 * 1024;

/// Estimated byte cost of one stored string value.
pub fn stored_value_cost(value: &str) -> u64 {
    value.chars().count() as u64 * 2
}

/// Remaining-capacity estimate, recomputed after every mutation.
///
/// Neither `remaining` nor `percentage` is clamped: usage beyond the
/// assumed budget goes negative rather than saturating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacitySnapshot {
    pub total: u64,
    pub used: u64,
    pub remaining: i64,
    pub percentage: f64,
}

impl CapacitySnapshot {
    /// Build a snapshot from the estimated bytes used across the partition.
    pub fn from_usage(used: u64) -> Self {
        let remaining = TOTAL_CAPACITY_BYTES as i64 - used as i64;
        let percentage = remaining as f64 / TOTAL_CAPACITY_BYTES as f64 * 100.0;
        CapacitySnapshot {
            total: TOTAL_CAPACITY_BYTES,
            used,
            remaining,
            percentage,
        }
    }
}
