//! This module contains the selection sort kernels: the standard one-ended
//! variant and the bidirectional variant that places both the minimum and the
//! maximum of the unsorted window on every pass.
//!
//! Both variants perform O(n²) comparisons regardless of input order and are
//! not stable.

use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::{Range, SortStats};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

pub(crate) fn selection_sort_inplace<T: SortElement>(data: &mut [T], ctx: &mut SortContext<'_>) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    for i in 0..n - 1 {
        let suffix = Range { low: i, high: n - 1 };
        let min = ctx.min_index(data, suffix);
        ctx.swap(data, i, min);
    }
}

pub(crate) fn bidirectional_selection_sort_inplace<T: SortElement>(
    data: &mut [T],
    ctx: &mut SortContext<'_>,
) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let mut left = 0;
    let mut right = n - 1;
    while left < right {
        let (min, mut max) = ctx.min_max_index(data, Range { low: left, high: right });
        ctx.swap(data, left, min);
        // The max was sitting at `left` and has just been moved to `min`.
        if max == left {
            max = min;
        }
        ctx.swap(data, right, max);
        left += 1;
        right -= 1;
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Standard selection sort: one minimum placed per pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSort;

impl<T: SortElement> SortStrategy<T> for SelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Selection
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        selection_sort_inplace(data, &mut ctx);
        Ok(ctx.finish())
    }
}

/// Bidirectional selection sort: minimum and maximum placed per pass,
/// halving the number of passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BidirectionalSelectionSort;

impl<T: SortElement> SortStrategy<T> for BidirectionalSelectionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BidirectionalSelection
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        bidirectional_selection_sort_inplace(data, &mut ctx);
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
    fn test_selection_sorts_basic_input() {
        let mut data = vec![64, 25, 12, 22, 11];
        SelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn test_selection_comparisons_independent_of_order() {
        let mut sorted: Vec<i32> = (0..20).collect();
        let mut reversed: Vec<i32> = (0..20).rev().collect();
        let a = SelectionSort.sort(&mut sorted).unwrap();
        let b = SelectionSort.sort(&mut reversed).unwrap();
        assert_eq!(a.comparisons, 190);
        assert_eq!(a.comparisons, b.comparisons);
        assert_eq!(a.swaps, 0);
    }

    #[test]
    fn test_bidirectional_sorts_basic_input() {
        let mut data = vec![9, 3, 7, 1, 8, 2];
        BidirectionalSelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn test_bidirectional_max_at_left_is_reresolved() {
        // The maximum starts at `left` and the minimum at `right`; after the
        // min swap the max lives where the min used to be.
        let mut data = vec![10, 4, 6, 5, 1];
        BidirectionalSelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 4, 5, 6, 10]);

        let mut data = vec![5, 1, 4, 2, 3];
        BidirectionalSelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bidirectional_duplicates_and_reverse() {
        let mut data = vec![4, 2, 2, 8, 1, 4, 3, 1];
        BidirectionalSelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 4, 8]);

        let mut data: Vec<i64> = (0..31).rev().collect();
        BidirectionalSelectionSort.sort(&mut data).unwrap();
        assert_eq!(data, (0..31).collect::<Vec<i64>>());
    }
}
