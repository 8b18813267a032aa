//! Algorithm selection and the `Sorter` facade.
//!
//! `Algorithm` names every sort and carries its metadata; `Sorter` combines an
//! algorithm with a validated `SortConfig` and runs it over caller data.

pub mod algorithm;
pub mod sorter;

pub use algorithm::{Algorithm, AlgorithmInfo, Family};
pub use sorter::Sorter;
