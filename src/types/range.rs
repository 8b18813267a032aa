//! This module defines the inclusive `[low, high]` index range that the
//! range-scoped entry points (Quick, Merge) and the primitive scans act on.

use crate::error::{SortError, SortResult};

/// A non-empty, inclusive index range into a sequence.
///
/// The empty range (`low > high`) is represented as `None` wherever a
/// `Range` is optional, so a constructed `Range` always satisfies
/// `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub low: usize,
    pub high: usize,
}

impl Range {
    /// Creates a range, returning `None` for the empty case `low > high`.
    pub fn new(low: usize, high: usize) -> Option<Self> {
        if low > high {
            None
        } else {
            Some(Self { low, high })
        }
    }

    /// The range covering a whole sequence of `len` elements.
    pub fn full(len: usize) -> Option<Self> {
        if len == 0 {
            None
        } else {
            Some(Self {
                low: 0,
                high: len - 1,
            })
        }
    }

    /// Validates caller-supplied signed bounds against a sequence length.
    ///
    /// `low == high + 1` is the legal empty range and yields `Ok(None)`.
    /// Anything outside `[0, len)` or more inverted than that is rejected.
    pub fn checked(low: isize, high: isize, len: usize) -> SortResult<Option<Self>> {
        let invalid = || SortError::InvalidRange { low, high, len };

        if low < 0 || high < -1 {
            return Err(invalid());
        }
        if high >= 0 && high as usize >= len {
            return Err(invalid());
        }
        if low > high + 1 {
            return Err(invalid());
        }
        if low == high + 1 {
            return Ok(None);
        }
        Ok(Some(Self {
            low: low as usize,
            high: high as usize,
        }))
    }

    /// Number of indices covered.
    pub(crate) fn len(&self) -> usize {
        self.high - self.low + 1
    }

    /// Overflow-safe midpoint, `low + (high - low) / 2`.
    pub fn mid(&self) -> usize {
        self.low + (self.high - self.low) / 2
    }
}
