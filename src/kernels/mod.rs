//! This module collects the pure, stateless sorting kernels.
//!
//! Every kernel is written against the shared `primitives::SortContext`, so
//! comparisons, swaps and writes are counted and traced identically across
//! algorithms. Each kernel also exposes a unit-like strategy struct that
//! implements `SortStrategy`; `crate::engine` resolves an `Algorithm` to one
//! of these.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Shared instrumented operations.
pub mod primitives;

/// Comparison sorts
pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

/// Distribution sorts
pub mod bucket;
pub mod radix;

//==================================================================================
// 2. Re-exports
//==================================================================================

pub use bubble::BubbleSort;
pub use bucket::BucketSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use selection::{BidirectionalSelectionSort, SelectionSort};
