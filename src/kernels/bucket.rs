//! This module contains the bucket sort kernel.
//!
//! A distribution sort for values from a bounded range. The input's min and
//! max define `range = max - min`, and each value lands in bucket
//! `floor((value - min) / range * (buckets - 1))`. Buckets are filled in input
//! order and each is insertion-sorted, so the overall sort is stable. The
//! buckets are then written back in bucket order.
//!
//! Bucket indices are computed in `f64`, so the kernel accepts any numeric
//! element. Non-finite values have no bucket and are rejected up front. When
//! the minimum and maximum elements compare equal the input is already sorted
//! and the kernel returns early instead of dividing by zero. The bucket count
//! is clamped to `[1, n]`.

use num_traits::ToPrimitive;

use crate::engine::Algorithm;
use crate::error::{SortError, SortResult};
use crate::kernels::primitives::SortContext;
use crate::observer::StepObserver;
use crate::traits::{SortElement, SortStrategy};
use crate::types::{Range, SortStats};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Converts every element to `f64`, failing on the first non-finite value.
fn finite_keys<T: SortElement>(data: &[T]) -> SortResult<Vec<f64>> {
    data.iter()
        .enumerate()
        .map(|(i, v)| match v.to_f64() {
            Some(x) if x.is_finite() => Ok(x),
            _ => Err(SortError::InvalidInput(format!(
                "bucket sort requires finite values, found {:?} at index {}",
                v, i
            ))),
        })
        .collect()
}

/// Maps a key to its bucket, clamped against floating-point overshoot.
#[inline]
fn bucket_index(key: f64, min: f64, range: f64, bucket_count: usize) -> usize {
    let scaled = (key - min) / range * (bucket_count - 1) as f64;
    (scaled.floor() as usize).min(bucket_count - 1)
}

/// Stable insertion sort of one bucket. Each entry carries the position it
/// held in the caller's sequence, which is what the observer is told.
fn sort_bucket<T: SortElement>(bucket: &mut [(T, usize)], ctx: &mut SortContext<'_>) {
    for i in 1..bucket.len() {
        let key = bucket[i];
        let mut j = i;
        while j > 0 && ctx.gt_values(bucket[j - 1].0, key.0, bucket[j - 1].1, key.1) {
            bucket[j] = bucket[j - 1];
            j -= 1;
        }
        bucket[j] = key;
    }
}

pub(crate) fn bucket_sort_inplace<T: SortElement>(
    data: &mut [T],
    bucket_count: Option<usize>,
    ctx: &mut SortContext<'_>,
) -> SortResult<()> {
    let n = data.len();
    if n <= 1 {
        return Ok(());
    }
    let keys = finite_keys(data)?;

    let full = Range { low: 0, high: n - 1 };
    let (min_i, max_i) = ctx.min_max_index(data, full);
    if data[min_i] >= data[max_i] {
        return Ok(());
    }
    let min = keys[min_i];
    // Distinct wide integers can share one f64; they all go to bucket 0.
    let range = match keys[max_i] - min {
        r if r > 0.0 => r,
        _ => 1.0,
    };

    let bucket_count = bucket_count.unwrap_or(n).clamp(1, n);
    let mut buckets: Vec<Vec<(T, usize)>> = vec![Vec::new(); bucket_count];
    for (i, (&value, &key)) in data.iter().zip(keys.iter()).enumerate() {
        let b = bucket_index(key, min, range, bucket_count);
        buckets[b].push((value, i));
        ctx.bucket_assign(i, b);
    }

    for bucket in buckets.iter_mut() {
        sort_bucket(bucket, ctx);
    }

    let mut k = 0;
    for bucket in &buckets {
        for &(value, _) in bucket {
            ctx.write(data, k, value);
            k += 1;
        }
    }
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Bucket sort over a min/max-normalised range.
///
/// `bucket_count: None` uses one bucket per element.
#[derive(Debug, Default, Clone, Copy)]
pub struct BucketSort {
    pub bucket_count: Option<usize>,
}

impl BucketSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            bucket_count: Some(bucket_count),
        }
    }
}

impl<T: SortElement> SortStrategy<T> for BucketSort {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bucket
    }

    fn sort_observed(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let mut ctx = SortContext::new(observer);
        bucket_sort_inplace(data, self.bucket_count, &mut ctx)?;
        Ok(ctx.finish())
    }
}
