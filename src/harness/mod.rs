//! Property checks that any `SortStrategy` must pass.
//!
//! The harness only consumes the `SortStrategy` capability. For an input it
//! checks that the output is a permutation of the input, is ordered, and is
//! unchanged by a second sort. Stability is observed through `Tagged` keys.
//!
//! `verify` reports findings; `assert_strategy` and `assert_algorithm` turn a
//! failed property into `SortError::Verification`.

pub mod generate;
pub mod scenarios;
mod tagged;

pub use tagged::{tags_in_order, Tagged};

use serde::Serialize;
use std::cmp::Ordering;

use crate::config::SortConfig;
use crate::engine::Algorithm;
use crate::error::{SortError, SortResult};
use crate::kernels::primitives::is_sorted;
use crate::traits::{SortElement, SortStrategy};

//==================================================================================
// 1. Verification Report
//==================================================================================

/// Outcome of running one strategy over one input.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub algorithm: Algorithm,
    pub len: usize,
    pub permutation: bool,
    pub ordered: bool,
    pub idempotent: bool,
    /// `None` when stability was not checked.
    pub stable: Option<bool>,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.permutation && self.ordered && self.idempotent && self.stable.unwrap_or(true)
    }

    /// Names of the properties that failed.
    pub fn failures(&self) -> Vec<&'static str> {
        let mut failed = Vec::new();
        if !self.permutation {
            failed.push("permutation");
        }
        if !self.ordered {
            failed.push("order");
        }
        if !self.idempotent {
            failed.push("idempotence");
        }
        if self.stable == Some(false) {
            failed.push("stability");
        }
        failed
    }

    fn into_result(self) -> SortResult<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(SortError::Verification(format!(
                "{} on {} elements violated: {}",
                self.algorithm,
                self.len,
                self.failures().join(", ")
            )))
        }
    }
}

//==================================================================================
// 2. Property Checks
//==================================================================================

fn reference_order<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Multiset equality under `PartialOrd`. Inputs must be totally ordered.
fn is_permutation<T: SortElement>(input: &[T], output: &[T]) -> bool {
    if input.len() != output.len() {
        return false;
    }
    let mut expected = input.to_vec();
    let mut actual = output.to_vec();
    expected.sort_by(reference_order);
    actual.sort_by(reference_order);
    expected
        .iter()
        .zip(actual.iter())
        .all(|(a, b)| a.partial_cmp(b) == Some(Ordering::Equal))
}

/// Sorts a copy of `input` and checks permutation, order and idempotence.
///
/// Errors from the strategy itself are passed through. Inputs holding values
/// that do not compare equal to themselves (NaN) are rejected, since no
/// ordering property can be stated for them.
pub fn verify<T: SortElement>(
    strategy: &dyn SortStrategy<T>,
    input: &[T],
) -> SortResult<VerificationReport> {
    if input.iter().any(|v| v.partial_cmp(v).is_none()) {
        return Err(SortError::InvalidInput(
            "harness inputs must be totally ordered".to_string(),
        ));
    }

    let mut output = input.to_vec();
    strategy.sort(&mut output)?;

    let mut again = output.clone();
    strategy.sort(&mut again)?;
    let idempotent = again
        .iter()
        .zip(output.iter())
        .all(|(a, b)| a.partial_cmp(b) == Some(Ordering::Equal));

    Ok(VerificationReport {
        algorithm: strategy.algorithm(),
        len: input.len(),
        permutation: is_permutation(input, &output),
        ordered: is_sorted(&output),
        idempotent,
        stable: None,
    })
}

/// Sorts tagged copies of `keys` and reports whether equal keys kept their
/// original relative order.
pub fn check_stability(strategy: &dyn SortStrategy<Tagged>, keys: &[i64]) -> SortResult<bool> {
    let mut tagged = Tagged::from_keys(keys);
    strategy.sort(&mut tagged)?;
    Ok(tags_in_order(&tagged))
}

//==================================================================================
// 3. Assertions
//==================================================================================

/// Runs `verify` and fails with `SortError::Verification` on any violation.
pub fn assert_strategy<T: SortElement>(
    strategy: &dyn SortStrategy<T>,
    input: &[T],
) -> SortResult<VerificationReport> {
    verify(strategy, input)?.into_result()
}

/// Full check of `algorithm` under `config` on integer keys, including
/// stability when the algorithm claims it.
pub fn assert_algorithm(
    algorithm: Algorithm,
    config: &SortConfig,
    keys: &[i64],
) -> SortResult<VerificationReport> {
    let strategy = algorithm.strategy::<i64>(config);
    let mut report = verify(strategy.as_ref(), keys)?;

    if algorithm.info().stable {
        let tagged_strategy = algorithm.strategy::<Tagged>(config);
        report.stable = Some(check_stability(tagged_strategy.as_ref(), keys)?);
    }

    let report = report.into_result()?;
    log::debug!(
        "{} passed verification on {} elements",
        report.algorithm,
        report.len
    );
    Ok(report)
}

#[cfg(test)]
mod harness_tests;
