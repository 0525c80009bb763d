// src/crawler.rs
// =============================================================================
// The public entry point: a Crawler bundles a loader and an extractor and can
// run any number of independent crawls with them.
//
// Example:
//   let crawler = DefaultCrawler::http(&FetchSettings::default())?;
//   let target = parse_target("https://example.com")?;
//   let result = crawler.crawl(target, true, 2, 10).await?;
//   for (page, links) in result.urls() { ... }
// =============================================================================

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::crawl::{self, CrawlOptions, CrawlResult};
use crate::error::CrawlError;
use crate::extract::{Extractor, HtmlExtractor};
use crate::fetch::{simple_backoff, with_retry, FetchSettings, HttpGetLoader, Loader, Retrying};

/// HTTP GET loader with linear backoff retries
pub type HttpLoader = Retrying<HttpGetLoader, fn(u32) -> Duration>;

/// Crawler over HTTP with the HTML link extractor
pub type DefaultCrawler = Crawler<HttpLoader, HtmlExtractor>;

/// A basic web crawler
pub struct Crawler<L, E> {
    loader: Arc<L>,
    extractor: Arc<E>,
}

impl<L, E> Crawler<L, E>
where
    L: Loader + 'static,
    E: Extractor + 'static,
{
    pub fn new(loader: L, extractor: E) -> Self {
        Self {
            loader: Arc::new(loader),
            extractor: Arc::new(extractor),
        }
    }

    // Crawls from `target`
    //
    // Loose input is sanitised: a negative max depth means no limit, fewer
    // than one worker means the default.
    pub async fn crawl(
        &self,
        target: Url,
        same_domain: bool,
        max_depth: i64,
        workers: i64,
    ) -> Result<CrawlResult, CrawlError> {
        let options = CrawlOptions::new(target, same_domain, max_depth, workers);
        self.crawl_with_options(options).await
    }

    pub async fn crawl_with_options(&self, options: CrawlOptions) -> Result<CrawlResult, CrawlError> {
        self.crawl_with_cancel(options, CancellationToken::new()).await
    }

    // Crawls until finished or until `cancel` fires, whichever comes first
    pub async fn crawl_with_cancel(
        &self,
        options: CrawlOptions,
        cancel: CancellationToken,
    ) -> Result<CrawlResult, CrawlError> {
        crawl::crawl(
            Arc::clone(&self.loader),
            Arc::clone(&self.extractor),
            options,
            cancel,
        )
        .await
    }
}

impl DefaultCrawler {
    // Builds the default crawler: HTTP GET with retries + HTML links
    pub fn http(settings: &FetchSettings) -> Result<Self, CrawlError> {
        let loader = HttpGetLoader::from_settings(settings)?;
        let backoff: fn(u32) -> Duration = simple_backoff;

        Ok(Crawler::new(
            with_retry(loader, backoff, settings.max_attempts),
            HtmlExtractor,
        ))
    }
}

impl<L, E> Clone for Crawler<L, E> {
    fn clone(&self) -> Self {
        Self {
            loader: Arc::clone(&self.loader),
            extractor: Arc::clone(&self.extractor),
        }
    }
}
