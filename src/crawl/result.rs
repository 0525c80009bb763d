// src/crawl/result.rs
// =============================================================================
// What a crawl hands back to its caller.
// =============================================================================

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use super::options::CrawlOptions;

/// Every page the crawler visited, and the links it found on each
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    target: Url,
    same_domain: bool,
    max_depth: usize,
    completed: bool,
    urls: BTreeMap<String, Vec<String>>,
    failures: BTreeMap<String, String>,
}

impl CrawlResult {
    pub(crate) fn new(
        options: &CrawlOptions,
        completed: bool,
        urls: BTreeMap<String, Vec<String>>,
        failures: BTreeMap<String, String>,
    ) -> Self {
        Self {
            target: options.target.clone(),
            same_domain: options.same_domain,
            max_depth: options.max_depth,
            completed,
            urls,
            failures,
        }
    }

    /// The URL the crawler started on
    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Whether the crawl was limited to the target's domain
    pub fn same_domain(&self) -> bool {
        self.same_domain
    }

    /// The depth the crawl was limited to, 0 for unlimited
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Visited page -> links found on it
    ///
    /// A page that failed to load is present with an empty list; see
    /// [`CrawlResult::failures`] to tell it apart from a page without links.
    pub fn urls(&self) -> &BTreeMap<String, Vec<String>> {
        &self.urls
    }

    /// Visited pages that could not be loaded or read, with the reason
    pub fn failures(&self) -> &BTreeMap<String, String> {
        &self.failures
    }

    /// False if the crawl was cancelled or hit its deadline before finishing
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn page_count(&self) -> usize {
        self.urls.len()
    }
}
