// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collatz (3n+1) sequence analysis over integer ranges.
//!
//! # Architecture
//!
//! The crate is layered bottom-up, each layer building on the one below:
//!
//! 1. **Step** ([`step`]): the single Collatz transform with its arithmetic
//!    safety bound. `1` is a fixed point.
//! 2. **Sequence** ([`trajectory`], [`sequence_length`], [`max_value`]):
//!    per-value queries built on repeated application of the step.
//! 3. **Length tables** ([`LengthTable`]): bulk sequence-length computation
//!    for every start in `[1, n]`. Two builders coexist:
//!    - [`LengthTable::build_naive`] walks every trajectory independently
//!      and is the correctness baseline.
//!    - [`LengthTable::build_memoized`] fills the table in increasing start
//!      order; as soon as a trajectory drops below its own start, the
//!      remaining length is already in the table and is added in O(1).
//! 4. **Analyses** ([`equal_length_twins`], [`equal_max_value_twins`],
//!    [`occurrence_histogram`]): range scans over the tables and walks.
//!
//! # The memoization invariant
//!
//! A [`LengthTable`] is filled strictly left to right and no slot is ever
//! written twice. While solving start `i`, any trajectory value `< i` is
//! therefore already final in the table and can be trusted. This single
//! invariant is what makes the memoized builder both correct and fast; it
//! also forces the fill to stay sequential (see `build_memoized` docs).
//!
//! # Errors
//!
//! All public operations validate eagerly and return
//! [`CollatzError`] variants; nothing is clamped or retried. Tables and
//! trajectories are created fresh per call: there is no cross-call caching
//! and no shared mutable state.
//!
//! # Example
//!
//! ```
//! use collatz::{trajectory, LengthTable};
//!
//! let walk = trajectory(3).unwrap();
//! assert_eq!(walk, vec![3, 10, 5, 16, 8, 4, 2, 1]);
//!
//! let table = LengthTable::build_memoized(9).unwrap();
//! assert_eq!(table.get(3), Some(8));
//! ```

pub mod analysis;
pub mod error;
pub mod lengths;
pub mod sequence;
pub mod step;

// Re-export commonly used types
pub use analysis::{
    equal_length_twins, equal_length_twins_with, equal_max_value_twins,
    equal_max_value_twins_with, occurrence_histogram, occurrence_histogram_with, Limits, Range,
    Twin, TwinMetric,
};
pub use error::{CollatzError, Result};
pub use lengths::LengthTable;
pub use sequence::{max_value, sequence_length, trajectory};
pub use step::{step, MAX_STEP_INPUT};
