//! The `Sorter` facade: one validated `SortConfig` plus a chosen `Algorithm`.
//!
//! This is the entry point applications use. It resolves the strategy per call,
//! logs every run, and is the only place that accepts an absent sequence.

use crate::config::SortConfig;
use crate::engine::Algorithm;
use crate::error::{SortError, SortResult};
use crate::kernels::{MergeSort, QuickSort};
use crate::observer::{NoopObserver, StepObserver};
use crate::traits::SortElement;
use crate::types::SortStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorter {
    algorithm: Algorithm,
    config: SortConfig,
}

impl Sorter {
    /// Creates a sorter, rejecting a config no run could succeed with.
    pub fn new(algorithm: Algorithm, config: SortConfig) -> SortResult<Self> {
        config.validate()?;
        Ok(Self { algorithm, config })
    }

    /// A sorter with the default configuration.
    pub fn with_defaults(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            config: SortConfig::default(),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn sort<T: SortElement>(&self, data: &mut [T]) -> SortResult<SortStats> {
        self.sort_observed(data, &mut NoopObserver)
    }

    /// Sorts `data` if present. An absent sequence is a no-op with zero stats.
    pub fn sort_opt<T: SortElement>(&self, data: Option<&mut [T]>) -> SortResult<SortStats> {
        match data {
            Some(data) => self.sort(data),
            None => {
                log::debug!("{}: no sequence given, nothing to sort", self.algorithm);
                Ok(SortStats::default())
            }
        }
    }

    pub fn sort_observed<T: SortElement>(
        &self,
        data: &mut [T],
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let strategy = self.algorithm.strategy::<T>(&self.config);
        let result = strategy.sort_observed(data, observer);
        self.report(data.len(), T::TYPE_NAME, &result);
        result
    }

    /// Sorts the inclusive index range `[low, high]`.
    ///
    /// Only Quick and Merge sort expose a range entry point; other algorithms
    /// return `SortError::InvalidInput` without touching `data`.
    pub fn sort_range<T: SortElement>(
        &self,
        data: &mut [T],
        low: isize,
        high: isize,
        observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        let result = if !self.algorithm.supports_range() {
            Err(SortError::InvalidInput(format!(
                "{} sort has no range entry point",
                self.algorithm
            )))
        } else if self.algorithm == Algorithm::Quick {
            QuickSort::new(self.config.recursion).sort_range(data, low, high, observer)
        } else {
            MergeSort::new(self.config.recursion).sort_range(data, low, high, observer)
        };
        self.report(data.len(), T::TYPE_NAME, &result);
        result
    }

    fn report(&self, len: usize, element: &str, result: &SortResult<SortStats>) {
        match result {
            Ok(stats) => {
                if self.config.collect_stats {
                    log::debug!(
                        "{} sort of {} x {}: {} comparisons, {} swaps, {} writes",
                        self.algorithm,
                        len,
                        element,
                        stats.comparisons,
                        stats.swaps,
                        stats.writes
                    );
                }
                log_metric!(
                    "event" = "sort",
                    "algorithm" = self.algorithm,
                    "len" = len,
                    "comparisons" = stats.comparisons,
                    "swaps" = stats.swaps,
                    "writes" = stats.writes
                );
            }
            Err(e) => log::warn!("{} sort of {} x {} rejected: {}", self.algorithm, len, element, e),
        }
    }
}
