// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bulk sequence-length tables.
//!
//! A [`LengthTable`] maps every start value in `[1, n]` to its sequence
//! length. Two builders produce numerically identical tables:
//!
//! - [`LengthTable::build_naive`]: every start walked independently, O(n · L)
//!   where L is the average trajectory length. The correctness baseline.
//! - [`LengthTable::build_memoized`]: one left-to-right pass that reuses
//!   already-final slots, the actual engineering artifact of this crate.
//!
//! # Fill invariant
//!
//! Slots are written in strictly increasing index order and never revisited.
//! Once `table[j]` is written it is final, so any later computation for a
//! start `i > j` may read it without rechecking. No slot is read before its
//! index has been written.

mod memoized;
mod naive;

use crate::error::{CollatzError, Result};

/// Sequence lengths for every start value in `[1, n]`.
///
/// Slot 0 is an unused sentinel (kept so that slot `i` corresponds to start
/// value `i` with no offset arithmetic). Immutable once built.
///
/// # Example
///
/// ```
/// use collatz::LengthTable;
///
/// let table = LengthTable::build_memoized(9).unwrap();
/// assert_eq!(table.max_start(), 9);
/// assert_eq!(table.get(7), Some(17));
/// assert_eq!(table.get(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthTable {
    lengths: Vec<u32>,
}

impl LengthTable {
    /// Allocate a zeroed table covering starts `1..=n`.
    fn with_max_start(n: i64) -> Result<Self> {
        Ok(LengthTable {
            lengths: vec![0; table_slots(n)?],
        })
    }

    /// Largest start value covered by this table.
    pub fn max_start(&self) -> i64 {
        self.lengths.len() as i64 - 1
    }

    /// Sequence length for `start`, or `None` outside `[1, max_start]`.
    pub fn get(&self, start: i64) -> Option<u32> {
        if start < 1 || start > self.max_start() {
            return None;
        }
        Some(self.lengths[start as usize])
    }

    /// The raw slots, sentinel slot 0 included.
    pub fn as_slice(&self) -> &[u32] {
        &self.lengths
    }
}

/// Number of slots for a table covering `[1, n]`, validated against the
/// addressable ceiling (`n + 1` entries of 4 bytes each must fit in an
/// allocation).
fn table_slots(n: i64) -> Result<usize> {
    const MAX_SLOTS: usize = isize::MAX as usize / std::mem::size_of::<u32>();
    if n < 1 {
        return Err(CollatzError::InvalidSize { requested: n });
    }
    match usize::try_from(n).ok().and_then(|v| v.checked_add(1)) {
        Some(slots) if slots <= MAX_SLOTS => Ok(slots),
        _ => Err(CollatzError::InvalidSize { requested: n }),
    }
}
