// src/crawl/worker.rs
// =============================================================================
// The two worker pools of the crawl engine.
//
//           +-------------------- requests --------------------+
//           v                                                  |
//   request workers: load -> extract -> resolve -> pipeline    |
//           |                                                  |
//           +-------------------- responses -------------------+
//                                                              |
//   response workers: record page -> depth check -> seen check +
//
// Both channels are unbounded, so handing a follow-up request back to the
// request pool never blocks a response worker. Workers run until the channel
// they read from is closed.
// =============================================================================

use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};
use url::Url;

use super::request::{CrawlRequest, CrawlResponse};
use super::state::CrawlState;
use crate::error::FetchError;
use crate::extract::Extractor;
use crate::fetch::Loader;
use crate::pipeline::UrlPipeline;

/// What a request worker needs to turn an address into links
pub(crate) struct Fetcher<L, E> {
    pub loader: Arc<L>,
    pub extractor: Arc<E>,
    pub pipeline: UrlPipeline,
}

// Fetches pages until the request channel closes
//
// A failed page is reported as a failed response, never retried here (the
// loader already did its retries) and never allowed to stop the crawl.
// Cancellation stops the worker without answering the request in hand.
pub(crate) async fn request_worker<L, E>(
    id: usize,
    fetcher: Arc<Fetcher<L, E>>,
    requests: AsyncReceiver<CrawlRequest>,
    responses: AsyncSender<CrawlResponse>,
    cancel: CancellationToken,
) where
    L: Loader,
    E: Extractor,
{
    while let Ok(request) = requests.recv().await {
        debug!(worker = id, url = %request.target, depth = request.depth, "fetching page");

        let outcome = tokio::select! {
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            outcome = scrape_urls(&*fetcher.loader, &*fetcher.extractor, &request.target) => outcome,
        };

        // A page cut off by cancellation was never visited, so it gets no
        // response and no entry in the result
        if matches!(outcome, Err(FetchError::Cancelled)) {
            debug!(worker = id, url = %request.target, "dropping cancelled request");
            break;
        }
        let outcome = outcome.map(|links| fetcher.pipeline.apply(&links));

        if responses.send(CrawlResponse { request, outcome }).await.is_err() {
            break;
        }
    }

    trace!(worker = id, "request worker stopped");
}

// Loads a page and returns its links as absolute addresses
async fn scrape_urls<L, E>(loader: &L, extractor: &E, page: &Url) -> Result<Vec<Url>, FetchError>
where
    L: Loader,
    E: Extractor,
{
    let body = loader.load(page).await.map_err(FetchError::Load)?;
    let links = extractor.extract(body).await?;

    Ok(resolve_links(page, &links))
}

// Resolves raw link targets against the page they were found on
//
// Links that can't be resolved are skipped one by one, they don't fail the
// page.
pub(crate) fn resolve_links(page: &Url, links: &[String]) -> Vec<Url> {
    links
        .iter()
        .filter_map(|link| match page.join(link) {
            Ok(url) => Some(url),
            Err(e) => {
                trace!(%page, link = %link, error = %e, "skipping unparseable link");
                None
            }
        })
        .collect()
}

// Records responses and dispatches follow-up requests until the response
// channel closes or the crawl is cancelled
//
// The token is only checked between responses, a response being processed
// is always finished.
pub(crate) async fn response_worker(
    id: usize,
    state: Arc<CrawlState>,
    responses: AsyncReceiver<CrawlResponse>,
    requests: AsyncSender<CrawlRequest>,
    cancel: CancellationToken,
) {
    loop {
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            received = responses.recv() => match received {
                Ok(response) => response,
                Err(_) => break,
            },
        };

        process_response(id, &state, &requests, response).await;

        // Every follow-up of this response has been counted by now, so this
        // can't bring the counter to zero while work remains
        state.outstanding.done();
    }

    trace!(worker = id, "response worker stopped");
}

async fn process_response(
    id: usize,
    state: &CrawlState,
    requests: &AsyncSender<CrawlRequest>,
    response: CrawlResponse,
) {
    let CrawlResponse { request, outcome } = response;

    let (links, failure) = match outcome {
        Ok(links) => (links, None),
        Err(err) => {
            warn!(url = %request.target, error = %err, "failed to crawl page");
            (Vec::new(), Some(err.to_string()))
        }
    };

    if !state.results.record(&request.target, &links, failure) {
        warn!(url = %request.target, "page was already recorded");
    }
    debug!(worker = id, url = %request.target, links = links.len(), "page recorded");

    for next in request.next_requests(&links) {
        if state.exceeds_max_depth(next.depth) {
            trace!(url = %next.target, depth = next.depth, "beyond max depth");
            continue;
        }
        // Another page already owns this address
        if !state.seen.mark_if_unseen(&next.target) {
            continue;
        }

        state.outstanding.add();
        if requests.send(next).await.is_err() {
            // Channel closed, the crawl is shutting down
            state.outstanding.done();
            break;
        }
    }
}
