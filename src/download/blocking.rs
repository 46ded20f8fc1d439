//! Blocking fetch-and-save, used by the worker-pool drivers.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, instrument};

use super::client::SavedFile;
use super::error::FetchError;
use super::filename::filename_from_url;
use super::persist::part_path;
use crate::config::DownloadConfig;
use crate::user_agent::default_user_agent;

/// Builds the blocking client shared by one worker pool.
///
/// The blocking builder defaults to a 30 second timeout; it is replaced by
/// the configured timeout, which is none unless set.
///
/// Must not be called from inside an async runtime worker thread.
///
/// # Errors
///
/// Returns the builder error if TLS or proxy initialization fails.
pub fn build_blocking_client(config: &DownloadConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(default_user_agent())
        .timeout(config.timeout())
        .build()
}

/// Blocking counterpart of [`fetch_and_save`](super::fetch_and_save).
///
/// The body is read completely before anything touches the output directory.
///
/// # Errors
///
/// Same as [`fetch_and_save`](super::fetch_and_save).
#[instrument(skip(client, config), fields(url = %url))]
pub fn fetch_and_save_blocking(
    client: &Client,
    url: &str,
    config: &DownloadConfig,
) -> Result<SavedFile, FetchError> {
    debug!("starting download");

    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::transport(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::http_status(url, status.as_u16()));
    }

    let filename = filename_from_url(url).ok_or_else(|| FetchError::missing_filename(url))?;
    let body = response
        .bytes()
        .map_err(|e| FetchError::transport(url, e))?;

    let output_dir = config.output_dir();
    std::fs::create_dir_all(output_dir).map_err(|e| FetchError::io(url, output_dir, e))?;

    let path = output_dir.join(&filename);
    let part = part_path(&path);

    if let Err(error) = std::fs::write(&part, &body) {
        let _ = std::fs::remove_file(&part);
        return Err(FetchError::io(url, part, error));
    }
    if let Err(error) = std::fs::rename(&part, &path) {
        let _ = std::fs::remove_file(&part);
        return Err(FetchError::io(url, path, error));
    }

    debug!(path = %path.display(), bytes = body.len(), "download complete");
    Ok(SavedFile {
        url: url.to_string(),
        path,
        bytes: body.len() as u64,
    })
}
