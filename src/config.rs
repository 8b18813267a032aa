// In: src/config.rs

//! The single source of truth for sort engine configuration.
//!
//! `SortConfig` is created once at the application boundary (typically from a
//! JSON document or built in code) and handed to `engine::Sorter`. It selects
//! the code path for the recursive algorithms and the tuning knobs of the
//! distribution sorts. Every field has a default, so an empty JSON object is a
//! valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SortError, SortResult};
use crate::kernels::radix::{validate_base, DEFAULT_RADIX_BASE};

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Selects between the textbook recursive form of Merge, Quick and Heap sort
/// and their explicit-stack / loop-based equivalents.
///
/// Both modes produce identical output. The choice only affects how much call
/// stack a run uses; it is never changed behind the caller's back.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecursionMode {
    /// **Default:** recursive implementations. Quick sort can recurse O(n)
    /// deep on sorted or reverse-sorted input.
    #[default]
    Recursive,

    /// Explicit-stack quick sort, bottom-up merge sort and loop-based heap
    /// sift-down. Stack usage stays bounded regardless of input order.
    Iterative,
}

//==================================================================================
// II. The Unified SortConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SortConfig {
    /// Code path for Merge, Quick and Heap sort.
    #[serde(default)]
    pub recursion: RecursionMode,

    /// Number base used by radix sort. Must be at least 2.
    #[serde(default = "default_radix_base")]
    pub radix_base: u32,

    /// Number of buckets for bucket sort. `None` means one bucket per element;
    /// counts above the input length are clamped to it.
    #[serde(default)]
    pub bucket_count: Option<usize>,

    /// If true, the engine logs a debug summary of every run's stats.
    #[serde(default = "default_true")]
    pub collect_stats: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            recursion: RecursionMode::default(),
            radix_base: default_radix_base(),
            bucket_count: None,
            collect_stats: true,
        }
    }
}

impl SortConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> SortResult<Self> {
        let config: SortConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values no sort could run with.
    pub fn validate(&self) -> SortResult<()> {
        validate_base(self.radix_base)?;
        if self.bucket_count == Some(0) {
            return Err(SortError::InvalidConfig(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_recursion(mut self, recursion: RecursionMode) -> Self {
        self.recursion = recursion;
        self
    }

    pub fn with_radix_base(mut self, base: u32) -> Self {
        self.radix_base = base;
        self
    }

    pub fn with_bucket_count(mut self, count: usize) -> Self {
        self.bucket_count = Some(count);
        self
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// Helper for `serde` to provide a default for `radix_base`.
fn default_radix_base() -> u32 {
    DEFAULT_RADIX_BASE
}
