// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for Collatz computations.
//!
//! Every public operation validates its inputs eagerly and fails with one of
//! these variants before any computation starts. Errors are terminal for the
//! call that raised them; no clamping, no retries.

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollatzError>;

/// Errors raised by Collatz operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollatzError {
    /// Value outside the arithmetic-safety bound: non-positive, or so large
    /// that advancing it could overflow `i64`.
    OutOfRange { value: i64, max: i64 },

    /// Requested table size is non-positive or exceeds the addressable
    /// ceiling for the output table.
    InvalidSize { requested: i64 },

    /// Range lower bound exceeds upper bound.
    RangeInvalid { lo: i64, hi: i64 },
}

impl fmt::Display for CollatzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollatzError::OutOfRange { value, max } => {
                write!(f, "Value {} out of range (must be in 1..={})", value, max)
            }
            CollatzError::InvalidSize { requested } => {
                write!(f, "Table size {} is not representable", requested)
            }
            CollatzError::RangeInvalid { lo, hi } => {
                write!(f, "Range lower bound {} exceeds upper bound {}", lo, hi)
            }
        }
    }
}

impl std::error::Error for CollatzError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_range() {
        let err = CollatzError::OutOfRange { value: 0, max: 100 };
        assert_eq!(err.to_string(), "Value 0 out of range (must be in 1..=100)");
    }

    #[test]
    fn test_display_range_invalid() {
        let err = CollatzError::RangeInvalid { lo: 9, hi: 3 };
        assert_eq!(err.to_string(), "Range lower bound 9 exceeds upper bound 3");
    }
}
