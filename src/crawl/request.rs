// src/crawl/request.rs
// =============================================================================
// The two messages flowing between the worker pools.
//
//   CrawlRequest  -> request workers  ("fetch this address")
//   CrawlResponse -> response workers ("here is what we found there")
// =============================================================================

use url::Url;

use crate::error::FetchError;

/// A single page the crawler should fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    /// Page the link was found on, None for the seed
    pub origin: Option<Url>,
    /// Page to fetch
    pub target: Url,
    /// Hops from the seed, the seed being 1
    pub depth: usize,
}

impl CrawlRequest {
    pub fn seed(target: Url) -> Self {
        Self {
            origin: None,
            target,
            depth: 1,
        }
    }

    // A request for a link found on this request's page
    pub fn next(&self, target: Url) -> Self {
        Self {
            origin: Some(self.target.clone()),
            target,
            depth: self.depth + 1,
        }
    }

    // Next-hop requests for every link found on this page, in order
    pub fn next_requests(&self, links: &[Url]) -> Vec<CrawlRequest> {
        links.iter().map(|link| self.next(link.clone())).collect()
    }
}

/// Outcome of fetching one request
#[derive(Debug)]
pub struct CrawlResponse {
    pub request: CrawlRequest,
    /// Normalised, filtered links on success
    pub outcome: Result<Vec<Url>, FetchError>,
}
