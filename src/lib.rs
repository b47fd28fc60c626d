use std::io;

use clap::Parser;
use thiserror::Error;

pub mod babylonian;
pub mod perfect;
pub mod report;
pub mod scan;

pub use babylonian::{
    convergence_limit, initial_guess, reference_sqrt, sqrt_babylonian, sqrt_babylonian_to,
    SqrtApprox,
};
pub use perfect::{is_perfect, proper_divisor_sum, proper_divisors};
pub use report::Report;
pub use scan::{perfect_numbers, write_reports};

pub const DEFAULT_LOWER_BOUND: i64 = 1;
pub const DEFAULT_UPPER_BOUND: i64 = 10000;
pub const DEFAULT_PRECISION: u32 = 15;
pub const MAX_PRECISION: u32 = 20;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid radicand({0}) for square root, expect a positive finite number.")]
    InvalidInput(f64),
    #[error("Invalid precision({0}), expect at most {max} decimal digits.", max = MAX_PRECISION)]
    InvalidPrecision(u32),
    #[error("Square root of {radicand} didn't converge to {limit} in time.")]
    NotConverged { radicand: f64, limit: f64 },
    #[error("Failed to write report: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(about = "Find perfect numbers in a range and approximate their square roots.")]
pub struct CLIArgs {
    /// First candidate tested.
    #[arg(long, default_value_t = DEFAULT_LOWER_BOUND, allow_negative_numbers = true)]
    pub lower: i64,
    /// Last candidate tested.
    #[arg(long, default_value_t = DEFAULT_UPPER_BOUND, allow_negative_numbers = true)]
    pub upper: i64,
    /// Decimal digits used for the convergence limit and for display.
    #[arg(long, default_value_t = DEFAULT_PRECISION, value_parser = clap::value_parser!(u32).range(0..=MAX_PRECISION as i64))]
    pub precision: u32,
    /// Raise log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub lower_bound: i64,
    pub upper_bound: i64,
    pub precision: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl From<&CLIArgs> for ScanConfig {
    fn from(args: &CLIArgs) -> Self {
        Self {
            lower_bound: args.lower,
            upper_bound: args.upper,
            precision: args.precision,
        }
    }
}

impl ScanConfig {
    pub fn new(lower_bound: i64, upper_bound: i64, precision: u32) -> Self {
        Self {
            lower_bound,
            upper_bound,
            precision,
        }
    }

    /// Candidates to scan, `None` if the bounds don't describe a positive range.
    pub fn candidates(&self) -> Option<(u64, u64)> {
        if self.lower_bound <= 0 || self.upper_bound <= 0 || self.lower_bound > self.upper_bound
        {
            return None;
        }

        Some((self.lower_bound as u64, self.upper_bound as u64))
    }
}
