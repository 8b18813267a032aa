//! This module defines the core, strongly-typed data representations shared by
//! every sorting kernel.
//!
//! It currently includes the inclusive index `Range` used by the range-scoped
//! entry points and the `SortStats` counters returned by every sort.

pub mod range;
pub mod stats;

// Re-export the main type(s) for easier access.
pub use range::Range;
pub use stats::SortStats;
