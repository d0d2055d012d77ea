// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Range-batch analyses over sequence lengths and trajectory maxima.
//!
//! These are thin consumers of the bulk builders and per-value walks:
//! adjacent-equality scans that emit [`Twin`]s, and an occurrence histogram.
//! Every analysis validates its inputs eagerly against a [`Limits`] value
//! before touching any table.

mod histogram;
mod twins;

pub use histogram::{occurrence_histogram, occurrence_histogram_with};
pub use twins::{
    equal_length_twins, equal_length_twins_with, equal_max_value_twins,
    equal_max_value_twins_with, TwinMetric,
};

use std::fmt;

use crate::error::{CollatzError, Result};

/// Memory-safety ceilings for the analyses.
///
/// The defaults are empirical heap limits, not algorithmic constraints: a
/// length table of 40,960,000 `u32` slots is ~160 MB, and the histogram
/// walks materialize full trajectories. Callers with more (or less) memory
/// can pass their own values through the `*_with` entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest start value accepted by the twin scans.
    pub max_twin_start: i64,

    /// Largest start range accepted by the occurrence histogram.
    pub max_histogram_start: i64,

    /// Largest value cutoff accepted by the occurrence histogram.
    pub max_histogram_value: i64,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_twin_start: 40_960_000,
            max_histogram_start: 10_000_000,
            max_histogram_value: 10_000_000,
        }
    }
}

/// A validated closed interval `[lo, hi]` of start values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    lo: i64,
    hi: i64,
}

impl Range {
    /// Validate `lo <= hi` and `lo >= 1`.
    ///
    /// Order is checked first: a reversed range reports
    /// [`CollatzError::RangeInvalid`] even when the bounds are also out of
    /// range. Ceiling checks against [`Limits`] belong to each analysis.
    pub fn new(lo: i64, hi: i64) -> Result<Self> {
        if lo > hi {
            return Err(CollatzError::RangeInvalid { lo, hi });
        }
        if lo < 1 {
            return Err(CollatzError::OutOfRange {
                value: lo,
                max: i64::MAX,
            });
        }
        Ok(Range { lo, hi })
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Check the upper bound against an analysis ceiling.
    fn ensure_within(&self, max: i64) -> Result<()> {
        if self.hi > max {
            return Err(CollatzError::OutOfRange {
                value: self.hi,
                max,
            });
        }
        Ok(())
    }
}

/// Two adjacent start values sharing an equal derived metric.
///
/// `position` is the lower of the two starts; `metric` is the shared value
/// (a sequence length or a trajectory maximum). Immutable after
/// construction; displays as `(position, metric)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Twin<M> {
    pub position: i64,
    pub metric: M,
}

impl<M: fmt::Display> fmt::Display for Twin<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_accepts_ordered_bounds() {
        let range = Range::new(5, 9).unwrap();
        assert_eq!((range.lo(), range.hi()), (5, 9));
        assert!(Range::new(7, 7).is_ok());
    }

    #[test]
    fn test_range_order_checked_before_bounds() {
        assert!(matches!(
            Range::new(9, 3),
            Err(CollatzError::RangeInvalid { lo: 9, hi: 3 })
        ));
        // Reversed AND non-positive: order wins.
        assert!(matches!(
            Range::new(0, -5),
            Err(CollatzError::RangeInvalid { .. })
        ));
    }

    #[test]
    fn test_range_rejects_non_positive_lo() {
        assert!(matches!(
            Range::new(0, 10),
            Err(CollatzError::OutOfRange { value: 0, .. })
        ));
    }

    #[test]
    fn test_twin_display() {
        let twin = Twin {
            position: 5,
            metric: 16i64,
        };
        assert_eq!(twin.to_string(), "(5, 16)");
    }
}
