// src/fetch/loader.rs
// =============================================================================
// Page loaders: "given an address, produce a byte stream or fail".
//
// The crawl engine only knows about the Loader trait. The default
// implementation is HttpGetLoader, which issues an HTTP GET and accepts 2xx
// responses only.
//
// Rust concepts:
// - Traits with `impl Future` returns: lets implementors write `async fn`
//   while the trait still promises the future is Send (needed by tokio::spawn)
// - BoxStream: a type-erased, heap allocated stream
// =============================================================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{CrawlError, LoadError};

/// Body of a loaded page, delivered in chunks
pub type PageStream = BoxStream<'static, Result<Bytes, LoadError>>;

/// Loads the page behind an address
pub trait Loader: Send + Sync {
    fn load(&self, url: &Url) -> impl Future<Output = Result<PageStream, LoadError>> + Send;
}

// A shared loader is still a loader
impl<L: Loader> Loader for Arc<L> {
    fn load(&self, url: &Url) -> impl Future<Output = Result<PageStream, LoadError>> + Send {
        (**self).load(url)
    }
}

/// Settings for the default HTTP loader
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Timeout for a single request
    pub timeout: Duration,
    /// How many times a page is tried before it is recorded as failed
    pub max_attempts: u32,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 5,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// Loads pages with an HTTP GET request
//
// reqwest::Client is cheap to clone (it's an Arc internally), so the loader is
// too.
#[derive(Debug, Clone)]
pub struct HttpGetLoader {
    client: Client,
}

impl HttpGetLoader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    // Builds the underlying client from settings
    //
    // Redirects are followed (up to 5) so the byte stream is always the final
    // page.
    pub fn from_settings(settings: &FetchSettings) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self::new(client))
    }
}

impl Loader for HttpGetLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        // Anything outside 2xx counts as a failed load
        if !status.is_success() {
            debug!(%url, %status, "non-success status");
            return Err(LoadError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .bytes_stream()
            .map_err(|e| LoadError::Body(e.to_string()))
            .boxed();

        Ok(body)
    }
}
