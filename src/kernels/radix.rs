//! This module contains the LSD radix sort kernel for integer sequences.
//!
//! Each digit pass is a counting sort that places elements right-to-left, so
//! elements with equal digits keep their relative order from the previous
//! pass. Digits are taken from magnitudes: `(|v| / exp) % base`.
//!
//! Negative values are split off, sorted by magnitude on their own and written
//! back reversed ahead of the non-negatives. Magnitudes are held as `u64`, so
//! `i64::MIN` is handled without overflow.

use crate::engine::Algorithm;
use crate::error::{SortError, SortResult};
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::SortStats;

/// Default number base for digit extraction.
pub const DEFAULT_RADIX_BASE: u32 = 10;

/// Largest accepted base. Each pass allocates one counter per digit value.
pub const MAX_RADIX_BASE: u32 = 1 << 16;

/// A value paired with the magnitude its digits are read from.
#[derive(Clone, Copy)]
struct Keyed<T> {
    magnitude: u64,
    value: T,
}

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Checks that `base` lies in `[2, MAX_RADIX_BASE]`.
pub fn validate_base(base: u32) -> SortResult<()> {
    if !(2..=MAX_RADIX_BASE).contains(&base) {
        return Err(SortError::InvalidBase(base));
    }
    Ok(())
}

/// One stable counting-sort pass on the digit selected by `exp`.
fn counting_sort_pass<T: Copy>(entries: &mut Vec<Keyed<T>>, exp: u64, base: u64) {
    let digit = |k: &Keyed<T>| ((k.magnitude / exp) % base) as usize;

    let mut count = vec![0usize; base as usize];
    for entry in entries.iter() {
        count[digit(entry)] += 1;
    }
    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    let mut output: Vec<Keyed<T>> = entries.clone();
    for entry in entries.iter().rev() {
        let d = digit(entry);
        count[d] -= 1;
        output[count[d]] = *entry;
    }
    *entries = output;
}

/// Sorts `entries` ascending by magnitude with as many passes as the largest
/// magnitude has digits.
fn sort_by_magnitude<T: Copy>(entries: &mut Vec<Keyed<T>>, base: u64, ctx: &mut SortContext<'_>) {
    let max = entries.iter().map(|k| k.magnitude).max().unwrap_or(0);
    let mut exp: u64 = 1;
    while max / exp > 0 {
        ctx.digit_pass(exp);
        counting_sort_pass(entries, exp, base);
        exp = match exp.checked_mul(base) {
            Some(next) => next,
            None => break,
        };
    }
}

pub(crate) fn radix_sort_inplace<T: SortElement>(
    data: &mut [T],
    base: u32,
    ctx: &mut SortContext<'_>,
) -> SortResult<()> {
    validate_base(base)?;
    if !T::INTEGRAL {
        return Err(SortError::UnsupportedAlgorithm {
            algorithm: "radix",
            element: T::TYPE_NAME,
        });
    }
    if data.len() <= 1 {
        return Ok(());
    }

    let mut negatives: Vec<Keyed<T>> = Vec::new();
    let mut non_negatives: Vec<Keyed<T>> = Vec::with_capacity(data.len());
    for &value in data.iter() {
        let (negative, magnitude) = value.radix_parts().ok_or(SortError::UnsupportedAlgorithm {
            algorithm: "radix",
            element: T::TYPE_NAME,
        })?;
        let keyed = Keyed { magnitude, value };
        if negative {
            negatives.push(keyed);
        } else {
            non_negatives.push(keyed);
        }
    }

    let base = u64::from(base);
    sort_by_magnitude(&mut negatives, base, ctx);
    sort_by_magnitude(&mut non_negatives, base, ctx);

    // Largest magnitude negative is the smallest value.
    let ordered = negatives.iter().rev().chain(non_negatives.iter());
    for (k, entry) in ordered.enumerate() {
        ctx.write(data, k, entry.value);
    }
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// LSD radix sort with a configurable base. Integers only.
#[derive(Debug, Clone, Copy)]
pub struct RadixSort {
    pub base: u32,
}

impl Default for RadixSort {
    fn default() -> Self {
        Self {
            base: DEFAULT_RADIX_BASE,
        }
    }
}

impl RadixSort {
    pub fn with_base(base: u32) -> Self {
        Self { base }
    }
}

impl<T: SortElement> SortStrategy<T> for RadixSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Radix
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        radix_sort_inplace(data, self.base, &mut ctx)?;
        Ok(ctx.finish())
    }
}
