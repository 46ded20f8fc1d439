//! CLI entry point: run every strategy over the same URL list.

use anyhow::Result;
use clap::Parser;
use imgfetch::{DownloadConfig, Strategy};
use tracing::debug;

mod cli;
mod output;

use cli::Args;

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn).
    // stdout carries the report, so routine logs stay off unless asked for.
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = DownloadConfig::default();
    for strategy in Strategy::ALL {
        let report = imgfetch::run(strategy, &args.urls, &config)?;
        output::print_report(&report);
    }

    Ok(())
}
