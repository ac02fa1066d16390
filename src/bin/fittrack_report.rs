// ABOUTME: Demo report binary for the fittrack workout calculator
// ABOUTME: Decodes the bundled sensor packets and prints one summary line each
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Contributors

//! Workout report generator.
//!
//! Processes the bundled tracker sensor packets in order and prints one
//! summary per packet. Any malformed packet aborts the batch.
//!
//! Usage:
//! ```bash
//! # Classic report lines
//! cargo run --bin fittrack-report
//!
//! # JSON output
//! cargo run --bin fittrack-report -- --format json
//!
//! # Verbose logging
//! cargo run --bin fittrack-report -- -v
//! ```

use anyhow::Result;
use clap::Parser;
use fittrack::formatters::{format_summary, OutputFormat};
use fittrack::logging::init_logging;
use fittrack::models::Workout;
use tracing::{debug, info};

/// Sensor packets captured by the tracker hardware: a kind tag plus the
/// positional readings for that kind.
const PACKETS: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15_000.0, 1.0, 75.0]),
    ("WLK", &[9_000.0, 1.0, 75.0, 180.0]),
];

#[derive(Parser)]
#[command(
    name = "fittrack-report",
    about = "Fittrack workout report generator",
    long_about = "Decode the bundled tracker sensor packets and print a summary per workout"
)]
struct ReportArgs {
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();
    init_logging(args.verbose)?;

    let format = OutputFormat::from_str_param(&args.format);
    info!(packets = PACKETS.len(), %format, "processing workout packets");

    for (code, params) in PACKETS {
        let workout = Workout::from_raw(code, params)?;
        debug!(kind = %workout.kind(), action = workout.action(), "decoded packet");
        let summary = workout.summary()?;
        println!("{}", format_summary(&summary, format)?);
    }

    Ok(())
}
