//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Download images from URLs with three concurrency strategies.
///
/// Every URL is downloaded once per strategy (multithread, multiprocess,
/// async) into the `images` directory, and the total time of each run is
/// printed for comparison.
#[derive(Parser, Debug)]
#[command(name = "imgfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Image URLs to download
    #[arg(required = true, num_args = 1.., value_name = "URL")]
    pub urls: Vec<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long)]
    pub quiet: bool,
}
