//! Per-run operation counters.

use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Counts of the primitive operations performed by one sort call.
///
/// These are the same figures a visualizer reports alongside the animation:
/// element comparisons, pairwise swaps, and single-slot writes (shifts,
/// copy-backs and scatter placements).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub writes: u64,
}

impl SortStats {
    /// Total number of recorded operations.
    pub fn total(&self) -> u64 {
        self.comparisons + self.swaps + self.writes
    }
}

impl AddAssign for SortStats {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
        self.writes += rhs.writes;
    }
}
