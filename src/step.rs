// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The single Collatz step.
//!
//! The transform maps `v` to `v / 2` when even and `3v + 1` when odd, with
//! `1` as a fixed point. The public [`step`] validates its input against
//! [`MAX_STEP_INPUT`] so the odd branch can never overflow; the bulk table
//! builders use the crate-private [`step_unchecked`] instead, because
//! trajectories routinely exceed the table size `n` while staying far below
//! the `i64` ceiling.

use crate::error::{CollatzError, Result};

/// Largest value the public step accepts: `3v + 1` must fit in `i64`.
pub const MAX_STEP_INPUT: i64 = (i64::MAX - 1) / 3;

/// Validate `v` against the arithmetic-safety bound.
pub(crate) fn ensure_in_range(v: i64) -> Result<()> {
    if v < 1 || v > MAX_STEP_INPUT {
        return Err(CollatzError::OutOfRange {
            value: v,
            max: MAX_STEP_INPUT,
        });
    }
    Ok(())
}

/// Advance `v` by one Collatz step.
///
/// Returns `v / 2` for even `v`, `3v + 1` for odd `v`, and `1` for `v == 1`
/// (the fixed point). Fails with [`CollatzError::OutOfRange`] when `v < 1`
/// or `v > MAX_STEP_INPUT`.
///
/// # Example
///
/// ```
/// use collatz::step;
///
/// assert_eq!(step(6).unwrap(), 3);
/// assert_eq!(step(3).unwrap(), 10);
/// assert_eq!(step(1).unwrap(), 1);
/// ```
pub fn step(v: i64) -> Result<i64> {
    ensure_in_range(v)?;
    if v == 1 {
        Ok(1)
    } else if v % 2 == 0 {
        Ok(v / 2)
    } else {
        Ok(3 * v + 1)
    }
}

/// Advance `v` without the public range check.
///
/// Callers must guarantee `1 < v <= MAX_STEP_INPUT`. The bulk builders
/// qualify: their inputs are capped well below the point where any
/// trajectory approaches the `i64` ceiling (the largest excursion from a
/// start under 40,960,000 is about 4.7e14).
#[inline]
pub(crate) fn step_unchecked(v: i64) -> i64 {
    debug_assert!(v > 1 && v <= MAX_STEP_INPUT, "step overflowed: {}", v);
    if v % 2 == 0 {
        v / 2
    } else {
        3 * v + 1
    }
}
