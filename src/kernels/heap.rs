//! This module contains the heap sort kernel.
//!
//! Builds a max-heap over the whole sequence (sift-down from `n/2 - 1` to 0),
//! then repeatedly swaps the root into the shrinking tail and restores the
//! heap. Sift-down is recursive by default (depth O(log n)); the iterative
//! mode runs the same descent as a loop.

use crate::config::RecursionMode;
use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::SortStats;

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Index of the largest of `root` and its children within the first `heap_len`
/// elements.
#[inline]
fn largest_of_family<T: SortElement>(
    data: &[T],
    heap_len: usize,
    root: usize,
    ctx: &mut SortContext<'_>,
) -> usize {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    if left < heap_len && ctx.greater(data, left, largest) {
        largest = left;
    }
    if right < heap_len && ctx.greater(data, right, largest) {
        largest = right;
    }
    largest
}

fn sift_down_recursive<T: SortElement>(
    data: &mut [T],
    heap_len: usize,
    root: usize,
    ctx: &mut SortContext<'_>,
) {
    let largest = largest_of_family(data, heap_len, root, ctx);
    if largest != root {
        ctx.swap(data, root, largest);
        sift_down_recursive(data, heap_len, largest, ctx);
    }
}

fn sift_down_iterative<T: SortElement>(
    data: &mut [T],
    heap_len: usize,
    mut root: usize,
    ctx: &mut SortContext<'_>,
) {
    loop {
        let largest = largest_of_family(data, heap_len, root, ctx);
        if largest == root {
            return;
        }
        ctx.swap(data, root, largest);
        root = largest;
    }
}

pub(crate) fn heap_sort_inplace<T: SortElement>(
    data: &mut [T],
    mode: RecursionMode,
    ctx: &mut SortContext<'_>,
) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let sift: fn(&mut [T], usize, usize, &mut SortContext<'_>) = match mode {
        RecursionMode::Recursive => sift_down_recursive::<T>,
        RecursionMode::Iterative => sift_down_iterative::<T>,
    };

    for root in (0..n / 2).rev() {
        sift(data, n, root, ctx);
    }
    for end in (1..n).rev() {
        ctx.swap(data, 0, end);
        sift(data, end, 0, ctx);
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// In-place heap sort. O(n log n) in every case. Not stable.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSort {
    pub mode: RecursionMode,
}

impl HeapSort {
    pub fn new(mode: RecursionMode) -> Self {
        Self { mode }
    }
}

impl<T: SortElement> SortStrategy<T> for HeapSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Heap
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        heap_sort_inplace(data, self.mode, &mut ctx);
        Ok(ctx.finish())
    }
}
