//! Canned input/expected-output pairs every algorithm is checked against.

use crate::config::SortConfig;
use crate::engine::{Algorithm, Sorter};
use crate::error::{SortError, SortResult};
use crate::traits::SortElement;

#[derive(Debug, Clone)]
pub struct Scenario<T> {
    pub name: &'static str,
    pub input: Vec<T>,
    pub expected: Vec<T>,
}

impl<T: SortElement> Scenario<T> {
    fn new(name: &'static str, input: Vec<T>, expected: Vec<T>) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }

    /// Runs `sorter` on a copy of the input and compares with `expected`.
    pub fn check(&self, sorter: &Sorter) -> SortResult<()> {
        let mut data = self.input.clone();
        sorter.sort(&mut data)?;
        if data != self.expected {
            return Err(SortError::Verification(format!(
                "scenario '{}' with {}: expected {:?}, got {:?}",
                self.name,
                sorter.algorithm(),
                self.expected,
                data
            )));
        }
        Ok(())
    }
}

/// Integer scenarios every algorithm must pass.
pub fn integer_scenarios() -> Vec<Scenario<i64>> {
    vec![
        Scenario::new("small_unsorted", vec![5, 2, 8, 3, 1], vec![1, 2, 3, 5, 8]),
        Scenario::new("reversed", vec![9, 7, 5, 3, 1], vec![1, 3, 5, 7, 9]),
        Scenario::new(
            "duplicates",
            vec![4, 2, 2, 8, 1, 4, 3, 1],
            vec![1, 1, 2, 2, 3, 4, 4, 8],
        ),
        Scenario::new("empty", vec![], vec![]),
        Scenario::new("single", vec![42], vec![42]),
        Scenario::new(
            "mixed_signs",
            vec![170, 45, 75, -90, -802, 24, 2, 66],
            vec![-802, -90, 2, 24, 45, 66, 75, 170],
        ),
        Scenario::new("negatives_only", vec![-5, -1, -300, -22], vec![-300, -22, -5, -1]),
    ]
}

/// Float scenarios for every algorithm except Radix.
pub fn float_scenarios() -> Vec<Scenario<f64>> {
    vec![
        Scenario::new(
            "unit_interval",
            vec![0.42, 0.32, 0.23, 0.52, 0.25, 0.47, 0.51],
            vec![0.23, 0.25, 0.32, 0.42, 0.47, 0.51, 0.52],
        ),
        Scenario::new("all_equal", vec![0.5, 0.5, 0.5], vec![0.5, 0.5, 0.5]),
        Scenario::new("empty", vec![], vec![]),
    ]
}

/// Runs every applicable scenario for `algorithm` and returns how many ran.
pub fn run_all(algorithm: Algorithm, config: &SortConfig) -> SortResult<usize> {
    let sorter = Sorter::new(algorithm, config.clone())?;
    let mut ran = 0;

    for scenario in integer_scenarios() {
        scenario.check(&sorter)?;
        ran += 1;
    }

    if algorithm != Algorithm::Radix {
        for scenario in float_scenarios() {
            scenario.check(&sorter)?;
            ran += 1;
        }
    }

    log::debug!("{}: {} scenarios passed", algorithm, ran);
    Ok(ran)
}
