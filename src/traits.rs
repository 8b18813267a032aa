//! This module defines shared traits used across the sorting kernels.
//!
//! `SortElement` is the single bound every kernel is written against, and
//! `SortStrategy` is the capability every algorithm variant implements so the
//! engine and the verification harness can treat them uniformly.

use num_traits::ToPrimitive;
use std::fmt::Debug;

use crate::engine::Algorithm;
use crate::error::SortResult;
use crate::observer::{NoopObserver, StepObserver};
use crate::types::SortStats;

//==================================================================================
// 1. Element Trait
//==================================================================================

/// A numeric element that can be sorted by every kernel in this crate.
///
/// Comparison sorts only need `PartialOrd`; Bucket additionally converts values
/// to `f64` through `ToPrimitive`; Radix requires the integer decomposition
/// exposed by `radix_parts`.
pub trait SortElement: Copy + PartialOrd + Debug + ToPrimitive + Send + Sync + 'static {
    /// Human-readable type name used in error messages.
    const TYPE_NAME: &'static str;

    /// `true` for integer types, which support radix sort.
    const INTEGRAL: bool;

    /// Splits an integer into `(is_negative, magnitude)`. `None` for floats.
    fn radix_parts(self) -> Option<(bool, u64)>;
}

// Implement the trait for all primitive integer types.
macro_rules! impl_sort_element_signed {
    ($($T:ty),+) => {
        $(
            impl SortElement for $T {
                const TYPE_NAME: &'static str = stringify!($T);
                const INTEGRAL: bool = true;

                #[inline]
                fn radix_parts(self) -> Option<(bool, u64)> {
                    Some((self < 0, (self as i64).unsigned_abs()))
                }
            }
        )+
    };
}

macro_rules! impl_sort_element_unsigned {
    ($($T:ty),+) => {
        $(
            impl SortElement for $T {
                const TYPE_NAME: &'static str = stringify!($T);
                const INTEGRAL: bool = true;

                #[inline]
                fn radix_parts(self) -> Option<(bool, u64)> {
                    Some((false, self as u64))
                }
            }
        )+
    };
}

macro_rules! impl_sort_element_float {
    ($($T:ty),+) => {
        $(
            impl SortElement for $T {
                const TYPE_NAME: &'static str = stringify!($T);
                const INTEGRAL: bool = false;

                #[inline]
                fn radix_parts(self) -> Option<(bool, u64)> {
                    None
                }
            }
        )+
    };
}

impl_sort_element_signed!(i8, i16, i32, i64, isize);
impl_sort_element_unsigned!(u8, u16, u32, u64, usize);
impl_sort_element_float!(f32, f64);

//==================================================================================
// 2. Strategy Capability
//==================================================================================

/// The uniform contract every sorting algorithm implements.
///
/// Implementations sort `data` ascending in place and return the operation
/// counters for the run. Empty and single-element inputs return immediately
/// with zeroed stats. An `Err` is only ever returned before `data` is touched.
pub trait SortStrategy<T: SortElement>: Send + Sync {
    /// Which algorithm this strategy implements.
    fn algorithm(&self) -> Algorithm;

    /// Sorts `data`, reporting every step to `observer`.
    fn sort_observed(&self, data: &mut [T], observer: &mut dyn StepObserver)
        -> SortResult<SortStats>;

    /// Sorts `data` without tracing.
    fn sort(&self, data: &mut [T]) -> SortResult<SortStats> {
        self.sort_observed(data, &mut NoopObserver)
    }

    /// Whether equal elements keep their relative input order.
    fn is_stable(&self) -> bool {
        self.algorithm().info().stable
    }

    fn name(&self) -> &'static str {
        self.algorithm().info().name
    }
}
