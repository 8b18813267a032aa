// In: src/error.rs

//! This module defines the single, unified error type for the entire sortvision library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every variant is raised *before* the input sequence is touched, so an `Err`
//! always means the caller's data is exactly as it was handed in.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortError {
    // =========================================================================
    // === Input Validation Errors
    // =========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid range [{low}, {high}] for a sequence of length {len}")]
    InvalidRange { low: isize, high: isize, len: usize },

    #[error("Invalid radix base {0}: base must be at least 2")]
    InvalidBase(u32),

    // =========================================================================
    // === Dispatch Errors
    // =========================================================================
    #[error("Algorithm '{algorithm}' does not support element type {element}")]
    UnsupportedAlgorithm {
        algorithm: &'static str,
        element: &'static str,
    },

    // =========================================================================
    // === Configuration & Verification Errors
    // =========================================================================
    /// An error from the Serde JSON library while reading a `SortConfig`.
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Verification failed: {0}")]
    Verification(String),
}

/// Convenience alias used throughout the crate.
pub type SortResult<T> = Result<T, SortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message_mentions_bounds() {
        let err = SortError::InvalidRange {
            low: 2,
            high: 9,
            len: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid range [2, 9] for a sequence of length 5"
        );
    }

    #[test]
    fn test_serde_error_converts_via_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SortError = parse_err.into();
        assert!(matches!(err, SortError::Config(_)));
    }
}
