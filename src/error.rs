// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// There are two layers:
// - Page-level failures (LoadError, ExtractError, FetchError). These never
//   abort a crawl. They end up recorded against the page that failed.
// - Crawl-level failures (CrawlError). These stop a crawl before it starts,
//   e.g. a seed address we can't use.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Why a page could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered, but not with a 2xx status
    #[error("failed to load {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The request never produced a response (DNS, connect, timeout, TLS...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body broke off while it was being read
    #[error("failed to read body: {0}")]
    Body(String),

    /// Failure reported by a custom loader
    #[error("{0}")]
    Other(String),
}

/// Why links could not be extracted from a loaded page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read page: {0}")]
    Read(#[from] LoadError),
}

/// Failure reason carried by a crawl response
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Load(LoadError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The crawl was cancelled while this page was in flight
    #[error("cancelled")]
    Cancelled,
}

/// Errors that prevent a crawl from running at all
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid target '{url}': {reason}")]
    InvalidTarget { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl CrawlError {
    pub(crate) fn invalid_target(url: impl Into<String>, reason: impl Into<String>) -> Self {
        CrawlError::InvalidTarget {
            url: url.into(),
            reason: reason.into(),
        }
    }
}
