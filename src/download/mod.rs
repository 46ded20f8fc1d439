//! Fetch-and-save: download one URL and write its body to disk.
//!
//! The operation comes in two forms with identical semantics:
//!
//! - [`fetch_and_save`] suspends at the network and file I/O awaits and is
//!   driven by the cooperative driver over one shared [`reqwest::Client`].
//! - [`fetch_and_save_blocking`] blocks the calling thread and is driven by
//!   the worker-pool drivers.
//!
//! Only `200 OK` responses are saved. The filename is the final path segment
//! of the URL, so two URLs ending in the same segment write the same file.
//!
//! # Example
//!
//! ```no_run
//! use imgfetch::DownloadConfig;
//! use imgfetch::download::{build_client, fetch_and_save};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DownloadConfig::new("./images");
//! let client = build_client(&config)?;
//! let saved = fetch_and_save(&client, "https://example.com/images/a.jpg", &config).await?;
//! println!("Saved {} bytes to {}", saved.bytes, saved.path.display());
//! # Ok(())
//! # }
//! ```

mod blocking;
mod client;
mod error;
mod filename;
mod persist;

pub use blocking::{build_blocking_client, fetch_and_save_blocking};
pub use client::{SavedFile, build_client, fetch_and_save};
pub use error::{FailureKind, FetchError};
pub use filename::filename_from_url;
