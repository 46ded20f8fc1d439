//! Error types for the fetch-and-save operation.
//!
//! Every failure a single URL can hit is a value of [`FetchError`]. Drivers
//! collect these per URL instead of aborting the batch.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while fetching one URL and saving it to disk.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than `200 OK`.
    #[error("failed to download {url}: HTTP {status}")]
    HttpStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Network-level error (DNS resolution, connection refused, TLS, body read).
    #[error("network error downloading {url}: {source}")]
    Transport {
        /// The URL that failed.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// File system error while creating the output directory or writing the file.
    #[error("IO error saving {url} to {path}: {source}")]
    Io {
        /// The URL whose body was being saved.
        url: String,
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The URL has no final path segment usable as a filename.
    #[error("cannot derive a filename from {url}")]
    MissingFilename {
        /// The offending URL.
        url: String,
    },

    /// The task running this download panicked or was aborted.
    #[error("download task for {url} did not complete: {message}")]
    Task {
        /// The URL the task was downloading.
        url: String,
        /// Description of the join failure.
        message: String,
    },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-success HTTP status.
    Http,
    /// Network or task failure before anything was written.
    Transport,
    /// Local failure: filesystem or filename derivation.
    Io,
}

impl FetchError {
    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a transport error from a reqwest error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates an IO error.
    pub fn io(url: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            url: url.into(),
            path: path.into(),
            source,
        }
    }

    /// Creates a missing-filename error.
    pub fn missing_filename(url: impl Into<String>) -> Self {
        Self::MissingFilename { url: url.into() }
    }

    /// Creates a task failure error.
    pub fn task(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Task {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::HttpStatus { .. } => FailureKind::Http,
            Self::Transport { .. } | Self::Task { .. } => FailureKind::Transport,
            Self::Io { .. } | Self::MissingFilename { .. } => FailureKind::Io,
        }
    }
}
