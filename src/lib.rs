// src/lib.rs
// =============================================================================
// web_crawler: a bounded-depth, optionally same-domain crawl from a single
// seed address, run by a fixed pool of concurrent workers.
//
// The result maps every visited page to the links found on it.
//
// Modules:
// - crawl: the crawl engine (worker pools, seen log, termination)
// - fetch: loading pages (HTTP GET, retries, backoff)
// - extract: finding links in loaded pages
// - pipeline: normalising and filtering discovered links
// - crawler: the Crawler facade tying a loader and an extractor together
// =============================================================================

pub mod crawl;
pub mod crawler;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;

pub use crawl::{parse_target, CrawlOptions, CrawlResult};
pub use crawler::{Crawler, DefaultCrawler, HttpLoader};
pub use error::{CrawlError, ExtractError, FetchError, LoadError};
pub use fetch::FetchSettings;
