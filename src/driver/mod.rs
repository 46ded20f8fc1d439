//! Drivers: run fetch-and-save over a whole URL list under one concurrency
//! strategy and time the batch.
//!
//! # Strategies
//!
//! - [`Strategy::Threaded`] and [`Strategy::Multiprocess`] both run on a
//!   bounded worker pool of OS threads ([`run_pool`]). The second one keeps
//!   its historical label but does not spawn processes; the workload is
//!   I/O-bound and process isolation would only add overhead.
//! - [`Strategy::Cooperative`] spawns one task per URL onto the current tokio
//!   runtime, all sharing one async client ([`run_cooperative`]).
//!
//! A failed download never fails the batch. Driver errors are reserved for
//! setup failures that happen before any download starts.

mod cooperative;
mod pool;

use std::fmt;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::DownloadConfig;
use crate::download::{FetchError, SavedFile};

pub use cooperative::run_cooperative;
pub use pool::run_pool;

/// Concurrency strategy used by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Bounded pool of worker threads.
    Threaded,
    /// Second worker-pool run, labeled as the process-based variant.
    Multiprocess,
    /// One task per URL on a single-threaded async runtime.
    Cooperative,
}

impl Strategy {
    /// Every strategy, in the order the binary runs them.
    pub const ALL: [Self; 3] = [Self::Threaded, Self::Multiprocess, Self::Cooperative];

    /// Short label used in reports and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Threaded => "multithread",
            Self::Multiprocess => "multiprocess",
            Self::Cooperative => "async",
        }
    }

    /// Whether this strategy runs on the worker pool.
    #[must_use]
    pub fn is_pool(self) -> bool {
        matches!(self, Self::Threaded | Self::Multiprocess)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors that prevent a driver from starting its batch.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// The single-threaded runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// A pool driver was asked to run a non-pool strategy.
    #[error("{0} is not a worker-pool strategy")]
    UnsupportedStrategy(Strategy),
}

/// Outcome of one fetch-and-save within a batch.
#[derive(Debug)]
pub struct FetchReport {
    /// Source URL.
    pub url: String,
    /// Wall-clock time spent on this URL.
    pub elapsed: Duration,
    /// The saved file, or why nothing was saved.
    pub result: Result<SavedFile, FetchError>,
}

impl FetchReport {
    /// Runs `fetch` and records how long it took.
    pub(crate) fn timed<F>(url: &str, fetch: F) -> Self
    where
        F: FnOnce() -> Result<SavedFile, FetchError>,
    {
        let started = Instant::now();
        let result = fetch();
        Self {
            url: url.to_string(),
            elapsed: started.elapsed(),
            result,
        }
    }
}

/// Result of one driver run.
#[derive(Debug)]
pub struct BatchReport {
    /// Strategy that produced this report.
    pub strategy: Strategy,
    /// Total wall-clock time for the batch.
    pub elapsed: Duration,
    /// One entry per input URL, in input order.
    pub outcomes: Vec<FetchReport>,
}

impl BatchReport {
    /// Iterates over successfully saved files.
    pub fn saved(&self) -> impl Iterator<Item = &SavedFile> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    /// Iterates over failures.
    pub fn failed(&self) -> impl Iterator<Item = &FetchError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    /// Number of saved files.
    #[must_use]
    pub fn saved_count(&self) -> usize {
        self.saved().count()
    }

    /// Number of failed URLs.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }
}

/// Runs one strategy to completion from synchronous code.
///
/// Pool strategies run on the calling thread's worker pool; the cooperative
/// strategy gets a fresh current-thread runtime that lives for this call.
///
/// # Errors
///
/// Returns a [`DriverError`] if the client, pool, or runtime cannot be set up.
pub fn run(
    strategy: Strategy,
    urls: &[String],
    config: &DownloadConfig,
) -> Result<BatchReport, DriverError> {
    match strategy {
        Strategy::Threaded | Strategy::Multiprocess => run_pool(strategy, urls, config),
        Strategy::Cooperative => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(DriverError::Runtime)?;
            runtime.block_on(run_cooperative(urls, config))
        }
    }
}
