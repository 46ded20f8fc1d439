//! Cooperative-task driver over the async fetch-and-save.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinError;
use tracing::{info, instrument, warn};

use super::{BatchReport, DriverError, FetchReport, Strategy};
use crate::config::DownloadConfig;
use crate::download::{FetchError, build_client, fetch_and_save};

/// Downloads every URL as its own task on the current tokio runtime and
/// waits for all of them.
///
/// The async client is created at the start of the call, cloned into each
/// task (clones share one connection pool), and dropped once every task has
/// finished. There is no fail-fast: download failures are per-URL values,
/// and a task that panics is recorded as [`FetchError::Task`] for its URL.
///
/// On a current-thread runtime all tasks interleave on one thread at their
/// await points.
///
/// # Errors
///
/// Returns [`DriverError::ClientBuild`] if the client cannot be built.
#[instrument(skip(urls, config), fields(urls = urls.len()))]
pub async fn run_cooperative(
    urls: &[String],
    config: &DownloadConfig,
) -> Result<BatchReport, DriverError> {
    let strategy = Strategy::Cooperative;
    let started = Instant::now();

    let client = build_client(config).map_err(DriverError::ClientBuild)?;
    let config = Arc::new(config.clone());

    info!(%strategy, "starting batch");

    let handles: Vec<_> = urls
        .iter()
        .map(|url| {
            let client = client.clone();
            let config = Arc::clone(&config);
            let url = url.clone();
            tokio::spawn(async move {
                let task_started = Instant::now();
                let result = fetch_and_save(&client, &url, &config).await;
                FetchReport {
                    url,
                    elapsed: task_started.elapsed(),
                    result,
                }
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (url, handle) in urls.iter().zip(handles) {
        outcomes.push(joined_outcome(url, handle.await));
    }
    drop(client);

    let report = BatchReport {
        strategy,
        elapsed: started.elapsed(),
        outcomes,
    };

    info!(
        %strategy,
        saved = report.saved_count(),
        failed = report.failed_count(),
        elapsed = ?report.elapsed,
        "batch complete"
    );

    Ok(report)
}

/// Turns a joined download task into its report. A task that panicked or was
/// aborted becomes a [`FetchError::Task`] for its URL.
fn joined_outcome(url: &str, joined: Result<FetchReport, JoinError>) -> FetchReport {
    match joined {
        Ok(outcome) => outcome,
        Err(join_error) => {
            warn!(url = %url, error = %join_error, "download task did not complete");
            FetchReport {
                url: url.to_string(),
                elapsed: Duration::ZERO,
                result: Err(FetchError::task(url, join_error.to_string())),
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn exploding_download() -> FetchReport {
        panic!("decoder exploded")
    }

    #[tokio::test]
    async fn test_panicked_task_is_reported_for_its_url() {
        let joined = tokio::spawn(exploding_download()).await;

        let outcome = joined_outcome("https://h/images/a.jpg", joined);

        assert_eq!(outcome.url, "https://h/images/a.jpg");
        let error = outcome.result.unwrap_err();
        assert!(
            matches!(&error, FetchError::Task { url, .. } if url == "https://h/images/a.jpg"),
            "unexpected error: {error:?}"
        );
        assert!(error.to_string().contains("panic"), "got: {error}");
    }

    #[tokio::test]
    async fn test_aborted_task_is_reported_for_its_url() {
        let handle = tokio::spawn(std::future::pending::<FetchReport>());
        handle.abort();

        let outcome = joined_outcome("https://h/images/b.png", handle.await);

        assert!(matches!(outcome.result, Err(FetchError::Task { .. })));
        assert_eq!(outcome.elapsed, Duration::ZERO);
    }
}
