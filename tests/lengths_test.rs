// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-validation of the two bulk builders, and the per-value walks
//! against the tables.

mod common;

use common::{assert_tables_match, FIRST_NINE_LENGTHS};

use collatz::{sequence_length, trajectory, CollatzError, LengthTable};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn test_known_first_nine() {
    let naive = LengthTable::build_naive(9).unwrap();
    let memoized = LengthTable::build_memoized(9).unwrap();
    assert_eq!(naive.as_slice(), &FIRST_NINE_LENGTHS);
    assert_eq!(memoized.as_slice(), &FIRST_NINE_LENGTHS);
}

#[test]
fn test_builders_agree_up_to_ten_thousand() {
    let naive = LengthTable::build_naive(10_000).unwrap();
    let memoized = LengthTable::build_memoized(10_000).unwrap();
    assert_tables_match(&naive, &memoized);
}

#[test]
fn test_builders_agree_on_random_sizes() {
    let mut rng = StdRng::seed_from_u64(0x636f6c6c61747a);
    for _ in 0..20 {
        let n = rng.gen_range(1..=3_000);
        let naive = LengthTable::build_naive(n).unwrap();
        let memoized = LengthTable::build_memoized(n).unwrap();
        assert_tables_match(&naive, &memoized);
    }
}

#[test]
fn test_table_matches_per_value_walk() {
    let table = LengthTable::build_memoized(1_000).unwrap();
    for i in (1..=1_000).step_by(37) {
        assert_eq!(table.get(i), Some(sequence_length(i).unwrap()));
    }
}

#[test]
fn test_every_trajectory_ends_in_one() {
    for v in 1..=1_000 {
        assert_eq!(*trajectory(v).unwrap().last().unwrap(), 1);
    }
}

#[test]
fn test_rebuilds_are_bit_identical() {
    let first = LengthTable::build_memoized(5_000).unwrap();
    let second = LengthTable::build_memoized(5_000).unwrap();
    assert_eq!(first.as_slice(), second.as_slice());

    let first = LengthTable::build_naive(5_000).unwrap();
    let second = LengthTable::build_naive(5_000).unwrap();
    assert_eq!(first.as_slice(), second.as_slice());
}

#[test]
fn test_invalid_sizes_rejected() {
    for n in [0, -1, i64::MIN] {
        assert!(matches!(
            LengthTable::build_naive(n),
            Err(CollatzError::InvalidSize { .. })
        ));
        assert!(matches!(
            LengthTable::build_memoized(n),
            Err(CollatzError::InvalidSize { .. })
        ));
    }
    assert!(matches!(
        LengthTable::build_memoized(i64::MAX),
        Err(CollatzError::InvalidSize { .. })
    ));
}
