// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized bulk builder: one left-to-right pass with early termination.

use log::debug;

use super::LengthTable;
use crate::error::Result;
use crate::step::step_unchecked;

impl LengthTable {
    /// Build the table for `[1, n]` in a single increasing-order pass.
    ///
    /// While walking the trajectory of start `i`, the first value that drops
    /// strictly below `i` has an already-final slot (the fill invariant:
    /// slots are written in increasing index order and never revisited), so
    /// the remaining length is added in O(1) and the walk stops.
    ///
    /// Trajectories overshoot `n` before collapsing, so the inner walk uses
    /// the raw step bounded only by `i64`, not the public step ceiling.
    ///
    /// Numerically identical to [`LengthTable::build_naive`]; same failure
    /// modes.
    ///
    /// This pass must stay sequential: solving start `i` out of order would
    /// read slots that are not yet final.
    pub fn build_memoized(n: i64) -> Result<LengthTable> {
        let mut table = LengthTable::with_max_start(n)?;
        debug!("building memoized length table for n = {}", n);

        for i in 1..=n {
            let mut current = i;
            let mut count: u32 = 0;
            loop {
                // The rest of this trajectory is already counted.
                if current < i {
                    count += table.lengths[current as usize];
                    break;
                }
                count += 1;
                if current == 1 {
                    break;
                }
                current = step_unchecked(current);
            }
            table.lengths[i as usize] = count;
        }
        Ok(table)
    }
}
