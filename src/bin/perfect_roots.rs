use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use perfect_roots::{CLIArgs, ScanConfig};
use tracing::{debug, trace};

fn main() -> Result<()> {
    let args = CLIArgs::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(args.verbose >= 2)
        .init();
    debug!("Started with verbosity level: {}", args.verbose);
    trace!("Full CLI args: {:?}", args);

    let config = ScanConfig::from(&args);
    let mut out = io::stdout().lock();
    perfect_roots::write_reports(&config, &mut out).with_context(|| {
        format!(
            "Failed to report perfect numbers in range [{}, {}].",
            config.lower_bound, config.upper_bound
        )
    })?;

    Ok(())
}
