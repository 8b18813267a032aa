//! The shared primitive operations every sorting kernel is built from.
//!
//! All element comparisons, swaps and single-slot writes go through a
//! `SortContext`, which bumps the run's `SortStats` and forwards the step to
//! the caller's observer. Keeping these in one place means no algorithm can
//! drift in how it counts or reports work.

use crate::observer::{SortEvent, StepObserver};
use crate::traits::SortElement;
use crate::types::{Range, SortStats};

//==================================================================================
// 1. Instrumented Context
//==================================================================================

/// Per-call instrumentation state: the running counters and the observer.
pub struct SortContext<'o> {
    stats: SortStats,
    observer: &'o mut dyn StepObserver,
}

impl<'o> SortContext<'o> {
    pub fn new(observer: &'o mut dyn StepObserver) -> Self {
        Self {
            stats: SortStats::default(),
            observer,
        }
    }

    /// Consumes the context and yields the counters gathered so far.
    pub fn finish(self) -> SortStats {
        self.stats
    }

    #[inline]
    fn record_compare(&mut self, i: usize, j: usize) {
        self.stats.comparisons += 1;
        self.observer.on_event(SortEvent::Compare { i, j });
    }

    //==============================================================================
    // Comparisons
    //==============================================================================

    /// `data[i] < data[j]`.
    #[inline]
    pub fn less<T: SortElement>(&mut self, data: &[T], i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        data[i] < data[j]
    }

    /// `data[i] > data[j]`.
    #[inline]
    pub fn greater<T: SortElement>(&mut self, data: &[T], i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        data[i] > data[j]
    }

    /// `a <= b` for values held outside the sequence (merge halves, keys).
    /// `i` and `j` are the sequence positions reported to the observer.
    #[inline]
    pub fn le_values<T: SortElement>(&mut self, a: T, b: T, i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        a <= b
    }

    /// `a > b` for values held outside the sequence.
    #[inline]
    pub fn gt_values<T: SortElement>(&mut self, a: T, b: T, i: usize, j: usize) -> bool {
        self.record_compare(i, j);
        a > b
    }

    //==============================================================================
    // Mutations
    //==============================================================================

    /// Swaps two positions. Self-swaps are skipped and not counted.
    #[inline]
    pub fn swap<T: SortElement>(&mut self, data: &mut [T], i: usize, j: usize) {
        if i == j {
            return;
        }
        data.swap(i, j);
        self.stats.swaps += 1;
        self.observer.on_event(SortEvent::Swap { i, j });
    }

    /// Stores `value` at `index`.
    #[inline]
    pub fn write<T: SortElement>(&mut self, data: &mut [T], index: usize, value: T) {
        data[index] = value;
        self.stats.writes += 1;
        self.observer.on_event(SortEvent::Write { index });
    }

    /// Reports a bucket assignment (no data is touched).
    #[inline]
    pub fn bucket_assign(&mut self, index: usize, bucket: usize) {
        self.observer
            .on_event(SortEvent::BucketAssign { index, bucket });
    }

    /// Reports the start of a radix digit pass.
    #[inline]
    pub fn digit_pass(&mut self, exponent: u64) {
        self.observer.on_event(SortEvent::DigitPass { exponent });
    }

    //==============================================================================
    // Range Scans
    //==============================================================================

    /// Index of the first minimum within `range`.
    pub fn min_index<T: SortElement>(&mut self, data: &[T], range: Range) -> usize {
        let mut min = range.low;
        for i in range.low + 1..=range.high {
            if self.less(data, i, min) {
                min = i;
            }
        }
        min
    }

    /// Index of the first maximum within `range`.
    pub fn max_index<T: SortElement>(&mut self, data: &[T], range: Range) -> usize {
        let mut max = range.low;
        for i in range.low + 1..=range.high {
            if self.greater(data, i, max) {
                max = i;
            }
        }
        max
    }

    /// Single pass locating both the minimum and maximum within `range`.
    pub fn min_max_index<T: SortElement>(&mut self, data: &[T], range: Range) -> (usize, usize) {
        let mut min = range.low;
        let mut max = range.high;
        for i in range.low..=range.high {
            if self.less(data, i, min) {
                min = i;
            }
            if self.greater(data, i, max) {
                max = i;
            }
        }
        (min, max)
    }
}

//==================================================================================
// 2. Uninstrumented Helpers
//==================================================================================

/// `true` if `data` is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
