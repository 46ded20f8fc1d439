//! Worker-pool driver over the blocking fetch-and-save.

use std::time::Instant;

use rayon::ThreadPoolBuilder;
use tracing::{info, instrument};

use super::{BatchReport, DriverError, FetchReport, Strategy};
use crate::config::DownloadConfig;
use crate::download::{build_blocking_client, fetch_and_save_blocking};

/// Downloads every URL on a pool of `config.workers()` threads and blocks
/// until all have finished.
///
/// Jobs are queued FIFO in input order, so the first `workers` downloads to
/// start are the first `workers` URLs; completion order is up to the pool.
/// The returned outcomes are in input order. One blocking client is shared
/// by all workers for the duration of the call.
///
/// Must not be called from an async runtime worker thread; use
/// `tokio::task::spawn_blocking` from async code.
///
/// # Errors
///
/// - [`DriverError::UnsupportedStrategy`] for [`Strategy::Cooperative`]
/// - [`DriverError::ClientBuild`] / [`DriverError::PoolBuild`] if setup fails
#[instrument(skip(urls, config), fields(urls = urls.len()))]
pub fn run_pool(
    strategy: Strategy,
    urls: &[String],
    config: &DownloadConfig,
) -> Result<BatchReport, DriverError> {
    if !strategy.is_pool() {
        return Err(DriverError::UnsupportedStrategy(strategy));
    }

    let started = Instant::now();
    let workers = config.workers().get();

    let client = build_blocking_client(config).map_err(DriverError::ClientBuild)?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(move |index| format!("{strategy}-worker-{index}"))
        .build()?;

    info!(%strategy, workers, "starting batch");

    let mut slots: Vec<Option<FetchReport>> = urls.iter().map(|_| None).collect();
    let client = &client;
    pool.scope_fifo(|scope| {
        for (slot, url) in slots.iter_mut().zip(urls) {
            scope.spawn_fifo(move |_| {
                *slot = Some(FetchReport::timed(url, || {
                    fetch_and_save_blocking(client, url, config)
                }));
            });
        }
    });
    // Every spawned job has filled its slot once the scope returns.
    let outcomes: Vec<FetchReport> = slots.into_iter().flatten().collect();

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
