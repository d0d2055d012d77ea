// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use collatz::LengthTable;

/// Sequence lengths for starts 1..=9, with the slot-0 sentinel.
pub const FIRST_NINE_LENGTHS: [u32; 10] = [0, 1, 2, 8, 3, 6, 9, 17, 4, 20];

/// Assert two tables agree slot by slot, reporting the first divergence.
pub fn assert_tables_match(expected: &LengthTable, actual: &LengthTable) {
    assert_eq!(expected.max_start(), actual.max_start());
    for i in 1..=expected.max_start() {
        assert_eq!(expected.get(i), actual.get(i), "tables diverge at start {}", i);
    }
}
