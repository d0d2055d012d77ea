// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adjacent-equality scans: equal-length and equal-max-value twins.

use log::debug;
use strum_macros::{Display, EnumString};

use super::{Limits, Range, Twin};
use crate::error::Result;
use crate::lengths::LengthTable;
use crate::sequence::max_value;

/// Which derived metric a twin scan compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum TwinMetric {
    Length,
    MaxValue,
}

/// Adjacent starts in `[lo, hi]` with equal sequence lengths.
///
/// Builds one memoized table covering `[1, hi + 1]`, then scans each `i` in
/// `[lo, hi]` and emits a [`Twin`] whenever `i` and `i + 1` have the same
/// length. Uses [`Limits::default`]; see [`equal_length_twins_with`].
///
/// # Example
///
/// ```
/// use collatz::equal_length_twins;
///
/// let twins = equal_length_twins(28, 30).unwrap();
/// assert_eq!(twins.len(), 2);
/// assert_eq!((twins[0].position, twins[0].metric), (28, 19));
/// ```
pub fn equal_length_twins(lo: i64, hi: i64) -> Result<Vec<Twin<u32>>> {
    equal_length_twins_with(&Limits::default(), lo, hi)
}

/// [`equal_length_twins`] with caller-supplied ceilings.
pub fn equal_length_twins_with(limits: &Limits, lo: i64, hi: i64) -> Result<Vec<Twin<u32>>> {
    let range = Range::new(lo, hi)?;
    range.ensure_within(limits.max_twin_start)?;

    let table = LengthTable::build_memoized(range.hi() + 1)?;
    let lengths = table.as_slice();

    let mut twins = Vec::new();
    for i in range.lo()..=range.hi() {
        if lengths[i as usize] == lengths[i as usize + 1] {
            twins.push(Twin {
                position: i,
                metric: lengths[i as usize],
            });
        }
    }
    debug!(
        "{} equal-length twins in [{}, {}]",
        twins.len(),
        range.lo(),
        range.hi()
    );
    Ok(twins)
}

/// Adjacent starts in `[lo, hi]` whose trajectories reach the same maximum.
///
/// Walks the full trajectory of every start in `[lo, hi + 1]` for its
/// maximum, then scans adjacent pairs. Uses [`Limits::default`]; see
/// [`equal_max_value_twins_with`].
///
/// # Example
///
/// ```
/// use collatz::equal_max_value_twins;
///
/// let twins = equal_max_value_twins(5, 6).unwrap();
/// assert_eq!(twins.len(), 1);
/// assert_eq!((twins[0].position, twins[0].metric), (5, 16));
/// ```
pub fn equal_max_value_twins(lo: i64, hi: i64) -> Result<Vec<Twin<i64>>> {
    equal_max_value_twins_with(&Limits::default(), lo, hi)
}

/// [`equal_max_value_twins`] with caller-supplied ceilings.
pub fn equal_max_value_twins_with(limits: &Limits, lo: i64, hi: i64) -> Result<Vec<Twin<i64>>> {
    let range = Range::new(lo, hi)?;
    range.ensure_within(limits.max_twin_start)?;

    let mut maxima = Vec::with_capacity((range.hi() - range.lo()) as usize + 2);
    for i in range.lo()..=range.hi() + 1 {
        maxima.push(max_value(i)?);
    }

    let mut twins = Vec::new();
    for (offset, pair) in maxima.windows(2).enumerate() {
        if pair[0] == pair[1] {
            twins.push(Twin {
                position: range.lo() + offset as i64,
                metric: pair[0],
            });
        }
    }
    debug!(
        "{} equal-max-value twins in [{}, {}]",
        twins.len(),
        range.lo(),
        range.hi()
    );
    Ok(twins)
}
