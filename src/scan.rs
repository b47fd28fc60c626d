use std::io::Write;

use tracing::{debug, info};

use crate::{perfect, Error, Report, ScanConfig};

/// Perfect numbers of the configured range in ascending order.
///
/// Bounds that aren't a positive, non-inverted range give an empty iterator.
pub fn perfect_numbers(config: &ScanConfig) -> impl Iterator<Item = u64> {
    let candidates = match config.candidates() {
        Some((lower, upper)) => lower..=upper,
        None => {
            debug!(
                lower = config.lower_bound,
                upper = config.upper_bound,
                "Bounds don't form a positive range, nothing to scan."
            );
            // An exhausted range.
            1..=0
        }
    };

    candidates.filter(|&n| perfect::is_perfect(n))
}

/// Writes one report per perfect number in the range, each followed by a blank line.
/// Returns how many were written.
pub fn write_reports<W: Write>(config: &ScanConfig, out: &mut W) -> Result<usize, Error> {
    info!(
        lower = config.lower_bound,
        upper = config.upper_bound,
        precision = config.precision,
        "Scanning for perfect numbers."
    );

    let mut count = 0;
    for n in perfect_numbers(config) {
        debug!(n, "Found perfect number.");
        let report = Report::new(n, config.precision)?;
        writeln!(out, "{}", report)?;
        count += 1;
    }

    info!(count, "Scan finished.");
    Ok(count)
}
