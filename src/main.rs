// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the collatz library.
//!
//! Thin wrapper: parses arguments, calls the library, prints results.
//! All computation lives in the library crate.

use std::str::FromStr;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::error;

use collatz::{
    equal_length_twins, equal_max_value_twins, max_value, occurrence_histogram, sequence_length,
    trajectory, LengthTable, Result, TwinMetric,
};

#[derive(Parser)]
#[command(name = "collatz")]
#[command(about = "Collatz sequence lengths, twins and occurrence histograms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the trajectory of one start value, with its length and maximum
    Sequence {
        /// Start value (>= 1)
        start: i64,
    },

    /// Build a sequence-length table for starts 1..=n
    Lengths {
        /// Largest start value covered by the table
        n: i64,

        /// Use the naive builder instead of the memoized one
        #[arg(long)]
        naive: bool,
    },

    /// Run both builders on the same input and compare wall times
    Timings {
        /// Largest start value covered by the tables
        n: i64,
    },

    /// Scan a range for adjacent starts with an equal metric
    Twins {
        /// Metric to compare: "length" or "max-value"
        #[arg(value_parser = parse_metric)]
        metric: TwinMetric,

        /// Lower bound of the scan (inclusive)
        lo: i64,

        /// Upper bound of the scan (inclusive)
        hi: i64,
    },

    /// Count trajectory-value occurrences across starts 1..=n
    Histogram {
        /// Largest start value walked
        n: i64,

        /// Largest value counted
        cutoff: i64,
    },
}

fn parse_metric(s: &str) -> std::result::Result<TwinMetric, String> {
    TwinMetric::from_str(s).map_err(|_| format!("unknown metric '{}' (length, max-value)", s))
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Sequence { start } => {
            let values = trajectory(start)?;
            println!(
                "{}",
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            println!("length: {}", sequence_length(start)?);
            println!("max:    {}", max_value(start)?);
        }
        Command::Lengths { n, naive } => {
            let table = if naive {
                LengthTable::build_naive(n)?
            } else {
                LengthTable::build_memoized(n)?
            };
            // Full dumps are only readable for small tables.
            if n <= 100 {
                for i in 1..=n {
                    println!("{}\t{}", i, table.as_slice()[i as usize]);
                }
            }
            let (longest, length) = (1..=n)
                .map(|i| (i, table.as_slice()[i as usize]))
                .max_by_key(|&(_, len)| len)
                .unwrap_or((1, 1));
            println!("{} starts; longest sequence {} at {}", n, length, longest);
        }
        Command::Timings { n } => {
            let started = Instant::now();
            let naive = LengthTable::build_naive(n)?;
            let naive_time = started.elapsed();
            println!("naive:    {:?}", naive_time);

            let started = Instant::now();
            let memoized = LengthTable::build_memoized(n)?;
            let memoized_time = started.elapsed();
            println!("memoized: {:?}", memoized_time);

            assert_eq!(naive, memoized, "builders disagree");
            println!(
                "speedup:  {:.2}x",
                naive_time.as_secs_f64() / memoized_time.as_secs_f64()
            );
        }
        Command::Twins { metric, lo, hi } => match metric {
            TwinMetric::Length => {
                for twin in equal_length_twins(lo, hi)? {
                    println!("{}", twin);
                }
            }
            TwinMetric::MaxValue => {
                for twin in equal_max_value_twins(lo, hi)? {
                    println!("{}", twin);
                }
            }
        },
        Command::Histogram { n, cutoff } => {
            let histogram = occurrence_histogram(n, cutoff)?;
            for (value, count) in histogram.iter().enumerate().filter(|&(_, &c)| c > 0) {
                println!("{}\t{}", value, count);
            }
        }
    }

    Ok(())
}
