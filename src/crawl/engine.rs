// src/crawl/engine.rs
// =============================================================================
// The crawl orchestrator.
//
// How it works:
// 1. Validate the seed and build the URL pipeline for this crawl
// 2. Start `workers` request workers and `workers` response workers
// 3. Mark the seed (as given and in canonical form) as seen, count it, and
//    send it to the request workers as given
// 4. Wait until the outstanding-work counter is back at zero (or the deadline
//    passes / the crawl is cancelled)
// 5. Close both channels so the workers exit, and collect the results
//
// Why a counter and not "the queue is empty"?
// - The request queue is empty every time all workers are busy fetching
// - The counter only reaches zero once every dispatched page has been
//   answered AND all of its follow-ups have been counted or discarded
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::options::{validate_target, CrawlOptions};
use super::request::{CrawlRequest, CrawlResponse};
use super::result::CrawlResult;
use super::state::CrawlState;
use super::worker::{request_worker, response_worker, Fetcher};
use crate::error::CrawlError;
use crate::extract::Extractor;
use crate::fetch::Loader;
use crate::pipeline::UrlPipeline;

// Runs one crawl to completion
//
// Individual page failures never make this fail: they are recorded in the
// result. The only error is a seed that can't be crawled.
pub async fn crawl<L, E>(
    loader: Arc<L>,
    extractor: Arc<E>,
    options: CrawlOptions,
    cancel: CancellationToken,
) -> Result<CrawlResult, CrawlError>
where
    L: Loader + 'static,
    E: Extractor + 'static,
{
    validate_target(&options.target)?;

    info!(
        seed = %options.target,
        same_domain = options.same_domain,
        max_depth = options.max_depth,
        workers = options.workers,
        "starting crawl"
    );

    // Our own token, so a deadline doesn't cancel the caller's token
    let cancel = cancel.child_token();

    // The seed is fetched exactly as given, its canonical form is only used
    // to keep links back to it from fetching it again
    let pipeline = UrlPipeline::for_crawl(&options.target, options.same_domain);
    let seed = options.target.clone();
    let canonical_seed = pipeline.normalize(&seed);

    let fetcher = Arc::new(Fetcher {
        loader,
        extractor,
        pipeline,
    });
    let state = Arc::new(CrawlState::new(options.max_depth));

    let (req_tx, req_rx) = kanal::unbounded_async::<CrawlRequest>();
    let (res_tx, res_rx) = kanal::unbounded_async::<CrawlResponse>();

    // Options built by hand may skip the sanitising in CrawlOptions::new
    let pool_size = options.workers.max(1);

    let mut workers = JoinSet::new();
    for id in 0..pool_size {
        workers.spawn(request_worker(
            id,
            Arc::clone(&fetcher),
            req_rx.clone(),
            res_tx.clone(),
            cancel.clone(),
        ));
    }
    for id in 0..pool_size {
        workers.spawn(response_worker(
            id,
            Arc::clone(&state),
            res_rx.clone(),
            req_tx.clone(),
            cancel.clone(),
        ));
    }

    // Queue the seed
    state.seen.mark_if_unseen(&seed);
    state.seen.mark_if_unseen(&canonical_seed);
    state.outstanding.add();
    if req_tx.send(CrawlRequest::seed(seed)).await.is_err() {
        state.outstanding.done();
    }

    // Stopping early wins a tie with finishing
    let completed = tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            warn!(pending = state.outstanding.pending(), "crawl cancelled");
            false
        }
        _ = deadline_elapsed(options.deadline) => {
            warn!(pending = state.outstanding.pending(), "crawl deadline reached");
            false
        }
        _ = state.outstanding.wait() => true,
    };

    // Close the channels so the workers exit
    cancel.cancel();
    let _ = req_tx.close();
    let _ = res_tx.close();

    if completed {
        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "crawl worker failed");
            }
        }
    } else {
        // In-flight loads may take a while, don't wait for them
        workers.shutdown().await;
    }

    let (urls, failures) = state.results.take();
    let result = CrawlResult::new(&options, completed, urls, failures);

    info!(
        pages = result.page_count(),
        failed = result.failures().len(),
        completed,
        "crawl finished"
    );

    Ok(result)
}

async fn deadline_elapsed(deadline: Option<Duration>) {
    match deadline {
        Some(deadline) => tokio::time::sleep(deadline).await,
        None => std::future::pending().await,
    }
}
