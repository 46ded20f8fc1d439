//! imgfetch library
//!
//! Downloads a list of images to disk, naming each file after the final path
//! segment of its URL, under three concurrency strategies so their timings
//! can be compared.
//!
//! # Architecture
//!
//! - [`download`] - the fetch-and-save operation, blocking and async forms
//! - [`driver`] - batch drivers (worker pool, cooperative tasks) and reports
//! - [`config`] - output directory, worker count, timeout

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod driver;
mod user_agent;

// Re-export commonly used types
pub use config::{DEFAULT_OUTPUT_DIR, DownloadConfig};
pub use download::{FailureKind, FetchError, SavedFile, fetch_and_save, fetch_and_save_blocking};
pub use driver::{BatchReport, DriverError, FetchReport, Strategy, run, run_cooperative, run_pool};
