use crate::config::{RecursionMode, SortConfig};
use crate::engine::Algorithm;
use crate::error::{SortError, SortResult};
use crate::harness::generate::{generate_f64, generate_i64, InputShape};
use crate::harness::{
    assert_algorithm, assert_strategy, check_stability, scenarios, verify, Tagged,
};
use crate::kernels::{BucketSort, RadixSort};
use crate::observer::{NoopObserver, RecordingObserver, StepObserver};
use crate::traits::SortStrategy;
use crate::types::SortStats;

// Test Helpers
/// A strategy that "sorts" by doing nothing, used to prove the harness can fail.
struct LeaveAsIs;

impl SortStrategy<i64> for LeaveAsIs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sort_observed(
        &self,
        _data: &mut [i64],
        _observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        Ok(SortStats::default())
    }
}

/// A strategy that overwrites the first element, breaking the permutation.
struct Clobber;

impl SortStrategy<i64> for Clobber {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Insertion
    }

    fn sort_observed(
        &self,
        data: &mut [i64],
        _observer: &mut dyn StepObserver,
    ) -> SortResult<SortStats> {
        data.sort();
        if let Some(first) = data.first_mut() {
            *first = i64::MIN;
        }
        Ok(SortStats::default())
    }
}

fn configs() -> Vec<SortConfig> {
    vec![
        SortConfig::default(),
        SortConfig::default()
            .with_recursion(RecursionMode::Iterative)
            .with_radix_base(2)
            .with_bucket_count(3),
    ]
}

#[test]
fn test_every_algorithm_passes_generated_inputs() {
    for config in configs() {
        for algorithm in Algorithm::ALL {
            for shape in InputShape::ALL {
                for (seed, len) in [(1u64, 0usize), (2, 1), (3, 2), (4, 17), (5, 128)] {
                    let keys = generate_i64(shape, len, seed);
                    let report = assert_algorithm(algorithm, &config, &keys).unwrap();
                    assert_eq!(report.len, len);
                    assert_eq!(report.stable.is_some(), algorithm.info().stable);
                }
            }
        }
    }
}

#[test]
fn test_every_algorithm_passes_all_scenarios() {
    for config in configs() {
        for algorithm in Algorithm::ALL {
            let ran = scenarios::run_all(algorithm, &config).unwrap();
            let expected = if algorithm == Algorithm::Radix { 7 } else { 10 };
            assert_eq!(ran, expected, "algorithm {}", algorithm);
        }
    }
}

#[test]
fn test_float_inputs_verify_for_non_radix_algorithms() {
    let config = SortConfig::default();
    for algorithm in Algorithm::ALL.into_iter().filter(|a| *a != Algorithm::Radix) {
        for shape in InputShape::ALL {
            let input = generate_f64(shape, 64, 11);
            let strategy = algorithm.strategy::<f64>(&config);
            let report = assert_strategy(strategy.as_ref(), &input).unwrap();
            assert!(report.passed());
        }
    }
}

#[test]
fn test_harness_reports_broken_strategies() {
    let input = vec![3i64, 1, 2];

    let report = verify::<i64>(&LeaveAsIs, &input).unwrap();
    assert!(report.permutation);
    assert!(!report.ordered);
    assert_eq!(report.failures(), vec!["order"]);
    assert!(matches!(
        assert_strategy::<i64>(&LeaveAsIs, &input),
        Err(SortError::Verification(_))
    ));

    let report = verify::<i64>(&Clobber, &input).unwrap();
    assert!(!report.permutation);
    assert!(report.ordered);
}

#[test]
fn test_harness_rejects_nan_inputs() {
    let strategy = Algorithm::Insertion.strategy::<f64>(&SortConfig::default());
    assert!(matches!(
        verify(strategy.as_ref(), &[1.0, f64::NAN]),
        Err(SortError::InvalidInput(_))
    ));
}

#[test]
fn test_stable_algorithms_keep_equal_keys_in_order() {
    let keys = [4, 2, 2, 8, 1, 4, 3, 1];
    let config = SortConfig::default();
    for algorithm in [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Bucket,
    ] {
        let strategy = algorithm.strategy::<Tagged>(&config);
        assert!(check_stability(strategy.as_ref(), &keys).unwrap(), "algorithm {}", algorithm);
    }

    let narrow_buckets = BucketSort::with_buckets(2);
    assert!(check_stability(&narrow_buckets, &keys).unwrap());
}

#[test]
fn test_radix_reverses_equal_negative_keys() {
    // Negatives are collected in input order and written back reversed.
    let strategy = RadixSort::default();
    assert!(!check_stability(&strategy, &[-1, -1]).unwrap());
    assert!(check_stability(&strategy, &[1, 1, 0]).unwrap());
}

#[test]
fn test_observer_counts_match_stats_on_generated_inputs() {
    let config = SortConfig::default().with_recursion(RecursionMode::Iterative);
    for algorithm in Algorithm::ALL {
        let mut data = generate_i64(InputShape::FewUnique, 60, 21);
        let mut rec = RecordingObserver::new();
        let stats = algorithm
            .strategy::<i64>(&config)
            .sort_observed(&mut data, &mut rec)
            .unwrap();
        assert_eq!(rec.count_compares() as u64, stats.comparisons, "algorithm {}", algorithm);
        assert_eq!(rec.count_swaps() as u64, stats.swaps, "algorithm {}", algorithm);
        assert_eq!(rec.count_writes() as u64, stats.writes, "algorithm {}", algorithm);
    }
}

#[test]
fn test_recursive_and_iterative_stats_agree_for_quick_and_heap() {
    let input = generate_i64(InputShape::Random, 300, 99);
    for algorithm in [Algorithm::Quick, Algorithm::Heap] {
        let mut a = input.clone();
        let mut b = input.clone();
        let rec_stats = algorithm
            .strategy::<i64>(&SortConfig::default())
            .sort_observed(&mut a, &mut NoopObserver)
            .unwrap();
        let it_stats = algorithm
            .strategy::<i64>(&SortConfig::default().with_recursion(RecursionMode::Iterative))
            .sort_observed(&mut b, &mut NoopObserver)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(rec_stats.comparisons, it_stats.comparisons, "algorithm {}", algorithm);
        assert_eq!(rec_stats.swaps, it_stats.swaps, "algorithm {}", algorithm);
    }
}

#[test]
fn test_iterative_quick_handles_long_sorted_input() {
    let config = SortConfig::default().with_recursion(RecursionMode::Iterative);
    let keys = generate_i64(InputShape::Sorted, 3_000, 5);
    let report = assert_algorithm(Algorithm::Quick, &config, &keys).unwrap();
    assert!(report.passed());
}
