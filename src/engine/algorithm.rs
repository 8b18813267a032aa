//! The `Algorithm` enum naming every sort in the crate, its static metadata,
//! and the mapping from an `Algorithm` plus `SortConfig` to a concrete
//! `SortStrategy`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::SortConfig;
use crate::error::SortError;
use crate::kernels::{
    BidirectionalSelectionSort, BubbleSort, BucketSort, HeapSort, InsertionSort, MergeSort,
    QuickSort, RadixSort, SelectionSort,
};
use crate::traits::{SortElement, SortStrategy};

//==================================================================================
// 1. Algorithm Identity
//==================================================================================

/// Every sorting algorithm the engine can run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Selection,
    BidirectionalSelection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Bucket,
    Radix,
}

/// Broad strategy class of an algorithm.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Orders elements by pairwise comparison only.
    Comparison,
    /// Places elements by value range or digits.
    Distribution,
}

/// Static description of an algorithm, as shown next to a visualization.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub family: Family,
    pub stable: bool,
    pub in_place: bool,
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::BidirectionalSelection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Bucket,
        Algorithm::Radix,
    ];

    pub fn info(&self) -> AlgorithmInfo {
        use Family::*;
        match self {
            Algorithm::Bubble => AlgorithmInfo {
                name: "bubble",
                family: Comparison,
                stable: true,
                in_place: true,
                time_best: "O(n)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Selection => AlgorithmInfo {
                name: "selection",
                family: Comparison,
                stable: false,
                in_place: true,
                time_best: "O(n²)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::BidirectionalSelection => AlgorithmInfo {
                name: "bidirectional_selection",
                family: Comparison,
                stable: false,
                in_place: true,
                time_best: "O(n²)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Insertion => AlgorithmInfo {
                name: "insertion",
                family: Comparison,
                stable: true,
                in_place: true,
                time_best: "O(n)",
                time_average: "O(n²)",
                time_worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Merge => AlgorithmInfo {
                name: "merge",
                family: Comparison,
                stable: true,
                in_place: false,
                time_best: "O(n log n)",
                time_average: "O(n log n)",
                time_worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Quick => AlgorithmInfo {
                name: "quick",
                family: Comparison,
                stable: false,
                in_place: true,
                time_best: "O(n log n)",
                time_average: "O(n log n)",
                time_worst: "O(n²)",
                space: "O(log n)",
            },
            Algorithm::Heap => AlgorithmInfo {
                name: "heap",
                family: Comparison,
                stable: false,
                in_place: true,
                time_best: "O(n log n)",
                time_average: "O(n log n)",
                time_worst: "O(n log n)",
                space: "O(1)",
            },
            Algorithm::Bucket => AlgorithmInfo {
                name: "bucket",
                family: Distribution,
                stable: true,
                in_place: false,
                time_best: "O(n + k)",
                time_average: "O(n + k)",
                time_worst: "O(n²)",
                space: "O(n + k)",
            },
            Algorithm::Radix => AlgorithmInfo {
                name: "radix",
                family: Distribution,
                stable: false,
                in_place: false,
                time_best: "O(d·(n + b))",
                time_average: "O(d·(n + b))",
                time_worst: "O(d·(n + b))",
                space: "O(n + b)",
            },
        }
    }

    /// `true` for Quick and Merge, which accept an explicit index range.
    pub fn supports_range(&self) -> bool {
        matches!(self, Algorithm::Quick | Algorithm::Merge)
    }

    //==============================================================================
    // Strategy Resolution
    //==============================================================================

    /// Builds the strategy implementing this algorithm under `config`.
    pub fn strategy<T: SortElement>(&self, config: &SortConfig) -> Box<dyn SortStrategy<T>> {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort),
            Algorithm::Selection => Box::new(SelectionSort),
            Algorithm::BidirectionalSelection => Box::new(BidirectionalSelectionSort),
            Algorithm::Insertion => Box::new(InsertionSort),
            Algorithm::Merge => Box::new(MergeSort::new(config.recursion)),
            Algorithm::Quick => Box::new(QuickSort::new(config.recursion)),
            Algorithm::Heap => Box::new(HeapSort::new(config.recursion)),
            Algorithm::Bucket => Box::new(BucketSort {
                bucket_count: config.bucket_count,
            }),
            Algorithm::Radix => Box::new(RadixSort::with_base(config.radix_base)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Parses the snake_case name, e.g. `"quick"` or `"bidirectional_selection"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.info().name == normalized)
            .ok_or_else(|| SortError::InvalidInput(format!("unknown algorithm '{}'", s)))
    }
}
