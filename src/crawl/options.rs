// src/crawl/options.rs
// =============================================================================
// Options for a single crawl, and validation of the seed address.
// =============================================================================

use std::time::Duration;

use url::Url;

use crate::error::CrawlError;

/// Worker count used when the caller asks for fewer than one
pub const DEFAULT_WORKERS: usize = 10;

/// How a crawl should behave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Address the crawl starts from
    pub target: Url,
    /// Only follow links with the same scheme and host as the target
    pub same_domain: bool,
    /// Deepest level to visit, the target being level 1. 0 means no limit.
    pub max_depth: usize,
    /// Number of workers in EACH of the two pools
    pub workers: usize,
    /// Give up and return a partial result after this long
    pub deadline: Option<Duration>,
}

impl CrawlOptions {
    // Creates options from loosely validated input
    //
    // A negative max depth becomes 0 (no limit), and a worker count below 1
    // falls back to DEFAULT_WORKERS.
    pub fn new(target: Url, same_domain: bool, max_depth: i64, workers: i64) -> Self {
        let max_depth = usize::try_from(max_depth).unwrap_or(0);
        let workers = match usize::try_from(workers) {
            Ok(n) if n >= 1 => n,
            _ => DEFAULT_WORKERS,
        };

        Self {
            target,
            same_domain,
            max_depth,
            workers,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

// Parses a user supplied seed and checks it can start a crawl
pub fn parse_target(raw: &str) -> Result<Url, CrawlError> {
    let url = Url::parse(raw.trim()).map_err(|e| CrawlError::invalid_target(raw, e.to_string()))?;
    validate_target(&url)?;
    Ok(url)
}

// The seed must be an absolute http(s) URL with a host
pub fn validate_target(url: &Url) -> Result<(), CrawlError> {
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CrawlError::invalid_target(
            url.as_str(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(CrawlError::invalid_target(url.as_str(), "missing host"));
    }
    Ok(())
}
