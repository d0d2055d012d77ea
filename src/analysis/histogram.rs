// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Occurrence histogram: how often each small value is visited.

use log::debug;

use super::Limits;
use crate::error::{CollatzError, Result};
use crate::sequence::trajectory;

/// Count trajectory-value occurrences across the starts `[1, n]`.
///
/// Walks the full trajectory of every start in `[1, n]` and, for each
/// element `<= cutoff`, increments that value's bucket. Returns `cutoff + 1`
/// buckets indexed by value (bucket 0 is never hit, trajectories stay
/// positive). `n` bounds how many starts are walked and `cutoff` bounds
/// which values are counted; the two are independent.
///
/// Uses [`Limits::default`]; see [`occurrence_histogram_with`].
pub fn occurrence_histogram(n: i64, cutoff: i64) -> Result<Vec<u64>> {
    occurrence_histogram_with(&Limits::default(), n, cutoff)
}

/// [`occurrence_histogram`] with caller-supplied ceilings.
pub fn occurrence_histogram_with(limits: &Limits, n: i64, cutoff: i64) -> Result<Vec<u64>> {
    if n < 1 || n > limits.max_histogram_start {
        return Err(CollatzError::OutOfRange {
            value: n,
            max: limits.max_histogram_start,
        });
    }
    if cutoff < 1 || cutoff > limits.max_histogram_value {
        return Err(CollatzError::OutOfRange {
            value: cutoff,
            max: limits.max_histogram_value,
        });
    }

    let mut occurrences = vec![0u64; cutoff as usize + 1];
    for i in 1..=n {
        for value in trajectory(i)? {
            if value <= cutoff {
                occurrences[value as usize] += 1;
            }
        }
    }
    debug!(
        "histogram over starts [1, {}] with value cutoff {}",
        n, cutoff
    );
    Ok(occurrences)
}
