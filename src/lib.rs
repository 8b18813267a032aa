//! This file is the root of the `sortvision` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`kernels`, `engine`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the types most callers need, so `use sortvision::*` style
//!     imports stay short.
//!
//! A typical caller picks an `Algorithm`, builds a `Sorter` from it and a
//! `SortConfig`, and sorts a mutable slice of numbers, optionally passing a
//! `StepObserver` to receive every comparison, swap and write as it happens.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
pub mod observability; // Make macros available throughout the crate

pub mod config;
pub mod engine;
pub mod error;
pub mod harness;
pub mod kernels;
pub mod observer;
pub mod traits;
pub mod types;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use config::{RecursionMode, SortConfig};
pub use engine::{Algorithm, AlgorithmInfo, Family, Sorter};
pub use error::{SortError, SortResult};
pub use observer::{FnObserver, NoopObserver, RecordingObserver, SortEvent, StepObserver};
pub use traits::{SortElement, SortStrategy};
pub use types::{Range, SortStats};
