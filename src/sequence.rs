// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full-sequence walks and per-value queries.
//!
//! A trajectory is the complete ordered list of values visited from a start
//! value down to and including `1`. It is materialized (not a lazy stream)
//! because the consumers need random access: the length query counts every
//! element and the max query scans them all.
//!
//! The walk is an explicit loop, not recursion; trajectories can run to
//! hundreds of steps and gain nothing from a call stack.

use crate::error::Result;
use crate::step::{ensure_in_range, step};

/// Materialize the complete trajectory from `v` down to `1`.
///
/// The result starts with `v` and ends with `1`; its length equals
/// [`sequence_length`] of the same start. Fails with
/// [`CollatzError::OutOfRange`](crate::CollatzError::OutOfRange) when `v` is
/// invalid, or when an intermediate value climbs past the step bound (only
/// possible for starts within a factor of ~3 of the bound itself).
///
/// # Example
///
/// ```
/// use collatz::trajectory;
///
/// assert_eq!(trajectory(3).unwrap(), vec![3, 10, 5, 16, 8, 4, 2, 1]);
/// assert_eq!(trajectory(1).unwrap(), vec![1]);
/// ```
pub fn trajectory(v: i64) -> Result<Vec<i64>> {
    ensure_in_range(v)?;
    let mut values = vec![v];
    let mut current = v;
    while current > 1 {
        current = step(current)?;
        values.push(current);
    }
    Ok(values)
}

/// Number of values in the trajectory of `v`, both endpoints counted.
///
/// `sequence_length(1) == 1`; `sequence_length(3) == 8`.
pub fn sequence_length(v: i64) -> Result<u32> {
    Ok(trajectory(v)?.len() as u32)
}

/// Largest value visited by the trajectory of `v` (including `v` itself).
pub fn max_value(v: i64) -> Result<i64> {
    let values = trajectory(v)?;
    // A trajectory is never empty, it contains at least the start value.
    Ok(values.into_iter().max().unwrap_or(v))
}
