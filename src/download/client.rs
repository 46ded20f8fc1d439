//! Async fetch-and-save over a shared `reqwest::Client`.
//!
//! One client is built per cooperative batch and cloned into every task, so
//! all downloads in the batch reuse its connection pool.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};

use super::error::FetchError;
use super::filename::filename_from_url;
use super::persist::part_path;
use crate::config::DownloadConfig;
use crate::user_agent::default_user_agent;

/// A file written by a successful fetch-and-save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Source URL.
    pub url: String,
    /// Path of the written file.
    pub path: PathBuf,
    /// Number of body bytes written.
    pub bytes: u64,
}

/// Builds the async client used by the cooperative driver.
///
/// # Errors
///
/// Returns the builder error if TLS or proxy initialization fails.
pub fn build_client(config: &DownloadConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(default_user_agent());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Downloads `url` and writes the body to `<output_dir>/<final path segment>`.
///
/// Control is yielded while awaiting the response, each body chunk, and file
/// writes. Any existing file of the same name is replaced once the body has
/// been fully received.
///
/// # Errors
///
/// - [`FetchError::Transport`] if the request or body read fails
/// - [`FetchError::HttpStatus`] if the status is not `200 OK`
/// - [`FetchError::MissingFilename`] if the URL has no usable final segment
/// - [`FetchError::Io`] if the directory or file cannot be written
#[instrument(skip(client, config), fields(url = %url))]
pub async fn fetch_and_save(
    client: &Client,
    url: &str,
    config: &DownloadConfig,
) -> Result<SavedFile, FetchError> {
    debug!("starting download");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::transport(url, e))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::http_status(url, status.as_u16()));
    }

    let filename = filename_from_url(url).ok_or_else(|| FetchError::missing_filename(url))?;
    let output_dir = config.output_dir();
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| FetchError::io(url, output_dir, e))?;

    let path = output_dir.join(&filename);
    let part = part_path(&path);

    let bytes = match stream_to_file(response, url, &part).await {
        Ok(bytes) => bytes,
        Err(error) => {
            debug!(path = %part.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(&part).await;
            return Err(error);
        }
    };

    if let Err(error) = tokio::fs::rename(&part, &path).await {
        let _ = tokio::fs::remove_file(&part).await;
        return Err(FetchError::io(url, path, error));
    }

    debug!(path = %path.display(), bytes, "download complete");
    Ok(SavedFile {
        url: url.to_string(),
        path,
        bytes,
    })
}

async fn stream_to_file(
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
) -> Result<u64, FetchError> {
    let file = File::create(file_path)
        .await
        .map_err(|e| FetchError::io(url, file_path, e))?;
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| FetchError::transport(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| FetchError::io(url, file_path, e))?;

        bytes_written += chunk.len() as u64;
    }

    writer
        .flush()
        .await
        .map_err(|e| FetchError::io(url, file_path, e))?;

    Ok(bytes_written)
}
