// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive bulk builder: every start walked independently.

use log::debug;

use super::LengthTable;
use crate::error::Result;
use crate::step::step_unchecked;

impl LengthTable {
    /// Build the table for `[1, n]` with no reuse across starts.
    ///
    /// Each start value is walked all the way down to 1, counting every
    /// value visited (both endpoints included). O(n · L) where L is the
    /// average trajectory length; kept as the correctness baseline for
    /// [`LengthTable::build_memoized`].
    ///
    /// Fails with [`CollatzError::InvalidSize`](crate::CollatzError::InvalidSize)
    /// when `n < 1` or the `n + 1` slots exceed the addressable ceiling.
    pub fn build_naive(n: i64) -> Result<LengthTable> {
        let mut table = LengthTable::with_max_start(n)?;
        debug!("building naive length table for n = {}", n);

        for i in 1..=n {
            let mut current = i;
            let mut count: u32 = 1;
            while current > 1 {
                current = step_unchecked(current);
                count += 1;
            }
            table.lengths[i as usize] = count;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lengths for starts 1..=9, slot 0 sentinel.
    const FIRST_NINE: [u32; 10] = [0, 1, 2, 8, 3, 6, 9, 17, 4, 20];

    #[test]
    fn test_first_nine_lengths() {
        let table = LengthTable::build_naive(9).unwrap();
        assert_eq!(table.as_slice(), &FIRST_NINE);
    }

    #[test]
    fn test_single_start() {
        let table = LengthTable::build_naive(1).unwrap();
        assert_eq!(table.as_slice(), &[0, 1]);
    }

    #[test]
    fn test_matches_per_value_walk() {
        let table = LengthTable::build_naive(50).unwrap();
        for i in 1..=50 {
            assert_eq!(
                table.get(i),
                Some(crate::sequence::sequence_length(i).unwrap()),
                "start {}",
                i
            );
        }
    }
}
