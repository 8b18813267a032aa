//! This module contains the merge sort kernels.
//!
//! Two code paths share one merge routine:
//! * **Recursive** (default): top-down split at `mid = low + (high - low) / 2`.
//!   Stack depth is O(log n).
//! * **Iterative**: bottom-up passes with doubling run widths. No recursion.
//!
//! The merge copies both halves into temporary buffers and takes from the left
//! half on ties, which is what keeps the sort stable in both modes.

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

/// Merges the sorted runs `[low, mid]` and `[mid + 1, high]`.
fn merge_runs<T: SortElement>(
    data: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    ctx: &mut SortContext<'_>,
) {
    let left: Vec<T> = data[low..=mid].to_vec();
    let right: Vec<T> = data[mid + 1..=high].to_vec();

    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        if ctx.le_values(left[i], right[j], low + i, mid + 1 + j) {
            ctx.write(data, k, left[i]);
            i += 1;
        } else {
            ctx.write(data, k, right[j]);
            j += 1;
        }
        k += 1;
    }
    // Whichever half is left over is already in order.
    for &value in &left[i..] {
        ctx.write(data, k, value);
        k += 1;
    }
    for &value in &right[j..] {
        ctx.write(data, k, value);
        k += 1;
    }
}

pub(crate) fn merge_sort_recursive<T: SortElement>(
    data: &mut [T],
    range: Range,
    ctx: &mut SortContext<'_>,
) {
    if range.low >= range.high {
        return;
    }
    let mid = range.mid();
    merge_sort_recursive(data, Range { low: range.low, high: mid }, ctx);
    merge_sort_recursive(data, Range { low: mid + 1, high: range.high }, ctx);
    merge_runs(data, range.low, mid, range.high, ctx);
}

pub(crate) fn merge_sort_iterative<T: SortElement>(
    data: &mut [T],
    range: Range,
    ctx: &mut SortContext<'_>,
) {
    let len = range.len();
    let mut width = 1;
    while width < len {
        let mut left = range.low;
        while left <= range.high {
            let mid = left.saturating_add(width - 1).min(range.high);
            let right_end = left.saturating_add(2 * width - 1).min(range.high);
            if mid < right_end {
                merge_runs(data, left, mid, right_end, ctx);
            }
            match right_end.checked_add(1) {
                Some(next) => left = next,
                None => break,
            }
        }
        width *= 2;
    }
}

fn merge_sort_range<T: SortElement>(
    data: &mut [T],
    range: Range,
    mode: RecursionMode,
    ctx: &mut SortContext<'_>,
) {
    match mode {
        RecursionMode::Recursive => merge_sort_recursive(data, range, ctx),
        RecursionMode::Iterative => merge_sort_iterative(data, range, ctx),
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Stable merge sort. O(n log n) time, O(n) auxiliary space per merge.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSort {
    pub mode: RecursionMode,
}

impl MergeSort {
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
            merge_sort_range(data, range, self.mode, &mut ctx);
        }
        Ok(ctx.finish())
    }
}

impl<T: SortElement> SortStrategy<T> for MergeSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Merge
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        if let Some(range) = Range::full(data.len()) {
            merge_sort_range(data, range, self.mode, &mut ctx);
        }
        Ok(ctx.finish())
    }
}
