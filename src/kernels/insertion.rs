//! This module contains the insertion sort kernel.
//!
//! Maintains a growing sorted prefix. Each new key is held aside while larger
//! prefix elements shift one slot right, then dropped into the gap. Only
//! strictly greater elements move, which makes the sort stable.

use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::SortStats;

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

pub(crate) fn insertion_sort_inplace<T: SortElement>(data: &mut [T], ctx: &mut SortContext<'_>) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && ctx.gt_values(data[j - 1], key, j - 1, i) {
            let shifted = data[j - 1];
            ctx.write(data, j, shifted);
            j -= 1;
        }
        if j != i {
            ctx.write(data, j, key);
        }
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Stable insertion sort. O(n) on sorted input, O(n²) otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSort;

impl<T: SortElement> SortStrategy<T> for InsertionSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        insertion_sort_inplace(data, &mut ctx);
        Ok(ctx.finish())
    }
}
