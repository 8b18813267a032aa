//! This module contains the bubble sort kernel.
//!
//! Repeated adjacent-pair passes over a shrinking unsorted prefix. The sort
//! stops after the first pass that performs no swap, so already-sorted input
//! costs exactly `n - 1` comparisons. Stable: only strictly greater neighbours
//! are exchanged.

use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::SortStats;

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

pub(crate) fn bubble_sort_inplace<T: SortElement>(data: &mut [T], ctx: &mut SortContext<'_>) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    for pass in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if ctx.greater(data, j, j + 1) {
                ctx.swap(data, j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Bubble sort with early termination. O(n) best case, O(n²) otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct BubbleSort;

impl<T: SortElement> SortStrategy<T> for BubbleSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bubble
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        bubble_sort_inplace(data, &mut ctx);
        Ok(ctx.finish())
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_sorts_basic_input() {
        let mut data = vec![5, 2, 8, 3, 1];
        BubbleSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_bubble_early_exit_on_sorted_input() {
        let mut data: Vec<i32> = (0..50).collect();
        let stats = BubbleSort.sort(&mut data).unwrap();
        assert_eq!(stats.comparisons, 49);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn test_bubble_reverse_input_swaps_every_inversion() {
        let mut data = vec![9, 7, 5, 3, 1];
        let stats = BubbleSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 3, 5, 7, 9]);
        assert_eq!(stats.swaps, 10);
    }

    #[test]
    fn test_bubble_floats() {
        let mut data = vec![0.5f32, -1.25, 3.0, 0.0];
        BubbleSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![-1.25, 0.0, 0.5, 3.0]);
    }
}
