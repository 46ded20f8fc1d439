//! Download configuration shared by every driver.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// Settings passed explicitly into every fetch-and-save call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    output_dir: PathBuf,
    workers: NonZeroUsize,
    timeout: Option<Duration>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl DownloadConfig {
    /// Creates a configuration writing into `output_dir`, with one worker per
    /// available CPU and no request timeout.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            workers: default_workers(),
            timeout: None,
        }
    }

    /// Sets the worker-pool size used by the thread-pool drivers.
    #[must_use]
    pub fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    /// Sets a total per-request timeout. Without one a hung connection
    /// blocks its own download indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Directory that receives downloaded files.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Worker-pool size for the thread-pool drivers.
    #[must_use]
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Per-request timeout, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn default_workers() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
