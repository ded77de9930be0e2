//! Progress summary record

use serde::{Deserialize, Serialize};

/// Uniform output of every aggregation function
///
/// `current` and `total` are counts for the plain roll-ups and accumulated
/// weights for the weighted ones. `percentage` is always a whole number in
/// `[0, 100]` when produced by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressData {
    /// Completed amount
    pub current: f64,
    /// Total amount
    pub total: f64,
    /// Rounded completion percentage
    pub percentage: f64,
}

impl ProgressData {
    /// Create a progress record
    #[inline]
    #[must_use]
    pub fn new(current: f64, total: f64, percentage: f64) -> Self {
        Self {
            current,
            total,
            percentage,
        }
    }

    /// The `{0, 0, 0}` value returned for empty input
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Check if nothing was counted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0.0
    }
}
