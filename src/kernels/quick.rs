//! This module contains the quick sort kernels.
//!
//! Partitioning is Lomuto with the last element of the active range as the
//! pivot. There is no pivot randomization, so already-sorted and
//! reverse-sorted inputs degrade to O(n²) comparisons. In
//! `RecursionMode::Recursive` those inputs also drive the recursion depth to
//! O(n); `RecursionMode::Iterative` keeps an explicit range stack that always
//! defers the larger partition, bounding it at O(log n).

use crate::config::RecursionMode;
use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::{Range, SortStats};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Lomuto partition of `range` around `data[range.high]`.
/// Returns the pivot's final index.
fn partition<T: SortElement>(data: &mut [T], range: Range, ctx: &mut SortContext<'_>) -> usize {
    let pivot_index = range.high;
    let mut boundary = range.low;
    for j in range.low..pivot_index {
        if ctx.le_values(data[j], data[pivot_index], j, pivot_index) {
            ctx.swap(data, boundary, j);
            boundary += 1;
        }
    }
    ctx.swap(data, boundary, pivot_index);
    boundary
}

pub(crate) fn quick_sort_recursive<T: SortElement>(
    data: &mut [T],
    range: Range,
    ctx: &mut SortContext<'_>,
) {
    if range.low >= range.high {
        return;
    }
    let p = partition(data, range, ctx);
    if p > range.low {
        quick_sort_recursive(data, Range { low: range.low, high: p - 1 }, ctx);
    }
    if p < range.high {
        quick_sort_recursive(data, Range { low: p + 1, high: range.high }, ctx);
    }
}

pub(crate) fn quick_sort_iterative<T: SortElement>(
    data: &mut [T],
    range: Range,
    ctx: &mut SortContext<'_>,
) {
    let mut stack: Vec<Range> = vec![range];
    while let Some(current) = stack.pop() {
        if current.low >= current.high {
            continue;
        }
        let p = partition(data, current, ctx);
        let left = if p > current.low {
            Range::new(current.low, p - 1)
        } else {
            None
        };
        let right = Range::new(p + 1, current.high);

        // Push the larger side first so the smaller one is processed next.
        let (larger, smaller) = match (left, right) {
            (Some(l), Some(r)) if l.len() >= r.len() => (Some(l), Some(r)),
            (l, r) => (r, l),
        };
        if let Some(r) = larger {
            stack.push(r);
        }
        if let Some(r) = smaller {
            stack.push(r);
        }
    }
}

fn quick_sort_range<T: SortElement>(
    data: &mut [T],
    range: Range,
    mode: RecursionMode,
    ctx: &mut SortContext<'_>,
) {
    match mode {
        RecursionMode::Recursive => quick_sort_recursive(data, range, ctx),
        RecursionMode::Iterative => quick_sort_iterative(data, range, ctx),
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Quick sort with a fixed last-element pivot. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSort {
    pub mode: RecursionMode,
}

impl QuickSort {
    pub fn new(mode: RecursionMode) -> Self {
        Self { mode }
    }

    /// Sorts only the inclusive index range `[low, high]`.
    ///
    /// Bounds outside the sequence return `SortError::InvalidRange` without
    /// touching `data`; `low == high + 1` is an empty range and a no-op.
    pub fn sort_range<T: SortElement>(
        &self,
        data: &mut [T],
        low: isize,
        high: isize,
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let range = Range::checked(low, high, data.len())?;
        let mut ctx = SortContext::new(observer);
        if let Some(range) = range {
            quick_sort_range(data, range, self.mode, &mut ctx);
        }
        Ok(ctx.finish())
    }
}

impl<T: SortElement> SortStrategy<T> for QuickSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Quick
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        if let Some(range) = Range::full(data.len()) {
            quick_sort_range(data, range, self.mode, &mut ctx);
        }
        Ok(ctx.finish())
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use crate::observer::NoopObserver;

    #[test]
    fn test_partition_places_pivot() {
        let mut obs = NoopObserver;
        let mut ctx = SortContext::new(&mut obs);
        let mut data = vec![7, 2, 9, 1, 5];
        let p = partition(&mut data, Range::full(5).unwrap(), &mut ctx);
        assert_eq!(p, 2);
        assert_eq!(data[p], 5);
        assert!(data[..p].iter().all(|&x| x <= 5));
        assert!(data[p + 1..].iter().all(|&x| x > 5));
    }

    #[test]
    fn test_quick_both_modes_sort() {
        for mode in [RecursionMode::Recursive, RecursionMode::Iterative] {
            let mut data = vec![10, 80, 30, 90, 40, 50, 70];
            QuickSort::new(mode).sort(&mut data).unwrap();
            assert_eq!(data, vec![10, 30, 40, 50, 70, 80, 90]);
        }
    }

    #[test]
    fn test_quick_sorted_input_is_quadratic() {
        let n = 64u64;
        let mut data: Vec<u64> = (0..n).collect();
        let stats = QuickSort::default().sort(&mut data).unwrap();
        assert_eq!(stats.comparisons, n * (n - 1) / 2);
    }

    #[test]
    fn test_quick_iterative_handles_long_reverse_run() {
        let mut data: Vec<i32> = (0..5_000).rev().collect();
        QuickSort::new(RecursionMode::Iterative).sort(&mut data).unwrap();
        assert_eq!(data, (0..5_000).collect::<Vec<i32>>());
    }

    #[test]
    fn test_quick_sort_range() {
        let mut data = vec![5, 4, 3, 2, 1];
        QuickSort::default()
            .sort_range(&mut data, 0, 2, &mut NoopObserver)
            .unwrap();
        assert_eq!(data, vec![3, 4, 5, 2, 1]);
    }

    #[test]
    fn test_quick_sort_range_invalid() {
        let mut data = vec![5, 4, 3];
        assert!(matches!(
            QuickSort::default().sort_range(&mut data, -1, 2, &mut NoopObserver),
            Err(SortError::InvalidRange { low: -1, high: 2, len: 3 })
        ));
        assert!(QuickSort::default()
            .sort_range(&mut data, 2, 0, &mut NoopObserver)
            .is_err());
        assert_eq!(data, vec![5, 4, 3]);
    }
}
