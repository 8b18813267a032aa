//! Seeded input generators for tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Overall arrangement of a generated sequence.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    Random,
    Sorted,
    Reversed,
    /// Only a handful of distinct values, so most keys are duplicates.
    FewUnique,
    AllEqual,
}

impl InputShape {
    pub const ALL: [InputShape; 5] = [
        InputShape::Random,
        InputShape::Sorted,
        InputShape::Reversed,
        InputShape::FewUnique,
        InputShape::AllEqual,
    ];
}

const INT_SPAN: i64 = 10_000;
const FEW_UNIQUE_INTS: [i64; 4] = [-50, 0, 25, 75];
const FEW_UNIQUE_FLOATS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Integers in `[-10_000, 10_000]` arranged as `shape`. Same seed, same output.
pub fn generate_i64(shape: InputShape, len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<i64> = match shape {
        InputShape::FewUnique => (0..len)
            .map(|_| FEW_UNIQUE_INTS[rng.random_range(0..FEW_UNIQUE_INTS.len())])
            .collect(),
        InputShape::AllEqual => vec![7; len],
        _ => (0..len)
            .map(|_| rng.random_range(-INT_SPAN..=INT_SPAN))
            .collect(),
    };
    arrange(&mut data, shape, |a, b| a.cmp(b));
    data
}

/// Floats in `[0, 1)` arranged as `shape`. Same seed, same output.
pub fn generate_f64(shape: InputShape, len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<f64> = match shape {
        InputShape::FewUnique => (0..len)
            .map(|_| FEW_UNIQUE_FLOATS[rng.random_range(0..FEW_UNIQUE_FLOATS.len())])
            .collect(),
        InputShape::AllEqual => vec![0.5; len],
        _ => (0..len).map(|_| rng.random::<f64>()).collect(),
    };
    arrange(&mut data, shape, |a, b| a.total_cmp(b));
    data
}

fn arrange<T, F>(data: &mut [T], shape: InputShape, cmp: F)
where
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    match shape {
        InputShape::Sorted => data.sort_by(&cmp),
        InputShape::Reversed => data.sort_by(|a, b| cmp(b, a)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::primitives::is_sorted;

    #[test]
    fn test_same_seed_same_sequence() {
        assert_eq!(
            generate_i64(InputShape::Random, 64, 7),
            generate_i64(InputShape::Random, 64, 7)
        );
        assert_ne!(
            generate_i64(InputShape::Random, 64, 7),
            generate_i64(InputShape::Random, 64, 8)
        );
    }

    #[test]
    fn test_shapes() {
        assert!(is_sorted(&generate_i64(InputShape::Sorted, 100, 1)));
        let mut reversed = generate_f64(InputShape::Reversed, 100, 1);
        reversed.reverse();
        assert!(is_sorted(&reversed));
        assert!(generate_i64(InputShape::AllEqual, 10, 1).iter().all(|&v| v == 7));
        assert!(generate_f64(InputShape::FewUnique, 50, 3)
            .iter()
            .all(|v| FEW_UNIQUE_FLOATS.contains(v)));
        assert!(generate_f64(InputShape::Random, 50, 3)
            .iter()
            .all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_zero_length() {
        for shape in InputShape::ALL {
            assert!(generate_i64(shape, 0, 0).is_empty());
            assert!(generate_f64(shape, 0, 0).is_empty());
        }
    }
}
