// tests/common/mod.rs
// =============================================================================
// Loaders shared by the crawl integration tests.
//
// - FixtureLoader: serves testdata/html
// - MapLoader: serves pages from memory
// - EndlessLoader, StallingLoader, FailingLoader: sites that misbehave
// =============================================================================

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use url::Url;
use web_crawler::fetch::{Loader, PageStream};
use web_crawler::LoadError;

/// Counts how often each address was loaded
#[derive(Debug, Default)]
pub struct CallLog {
    calls: Mutex<HashMap<String, usize>>,
}

impl CallLog {
    pub fn record(&self, url: &Url) {
        *self.calls.lock().entry(url.to_string()).or_default() += 1;
    }

    pub fn count(&self, url: &str) -> usize {
        self.calls.lock().get(url).copied().unwrap_or(0)
    }

    pub fn snapshot(&self) -> HashMap<String, usize> {
        self.calls.lock().clone()
    }
}

fn page(body: impl Into<Bytes>) -> PageStream {
    let body = body.into();
    stream::once(async move { Ok(body) }).boxed()
}

/// Serves the pages in testdata/html
///
/// github.com paths map to "gh" + path with '/' replaced by '_' + ".html",
/// every other host maps to the bare path.
#[derive(Debug, Default)]
pub struct FixtureLoader {
    pub calls: CallLog,
}

impl FixtureLoader {
    fn fixture_path(url: &Url) -> Option<PathBuf> {
        let filename = if url.host_str() == Some("github.com") {
            format!("gh{}.html", url.path().replace('/', "_"))
        } else {
            url.path().trim_start_matches('/').to_string()
        };
        if filename.is_empty() {
            return None;
        }
        Some(
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("testdata/html")
                .join(filename),
        )
    }
}

impl Loader for FixtureLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        self.calls.record(url);

        let path = Self::fixture_path(url)
            .ok_or_else(|| LoadError::Other(format!("no fixture for {url}")))?;
        let body = tokio::fs::read(&path)
            .await
            .map_err(|e| LoadError::Other(format!("{}: {e}", path.display())))?;

        Ok(page(body))
    }
}

/// Serves pages from memory, keyed by full address
#[derive(Debug, Default)]
pub struct MapLoader {
    pages: HashMap<String, String>,
    pub calls: CallLog,
}

impl MapLoader {
    pub fn new<'a>(pages: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, body)| (url.to_string(), body))
                .collect(),
            calls: CallLog::default(),
        }
    }
}

impl Loader for MapLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        self.calls.record(url);

        // Give other workers a chance to run so discoveries interleave
        tokio::task::yield_now().await;

        match self.pages.get(url.as_str()) {
            Some(body) => Ok(page(body.clone())),
            None => Err(LoadError::Other(format!("not found: {url}"))),
        }
    }
}

/// An endless site: /page/N links to /page/N+1 and back to /page/0
#[derive(Debug, Default)]
pub struct EndlessLoader {
    pub calls: CallLog,
}

impl Loader for EndlessLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        self.calls.record(url);

        let n: u64 = url
            .path()
            .trim_start_matches("/page/")
            .parse()
            .map_err(|_| LoadError::Other(format!("not a page: {url}")))?;

        Ok(page(format!(
            r#"<a href="/page/{}">next</a><a href="/page/0">first</a>"#,
            n + 1
        )))
    }
}

/// Never finishes loading the given address, serves the rest from a map
#[derive(Debug)]
pub struct StallingLoader {
    pub stall_on: String,
    pub inner: MapLoader,
}

impl Loader for StallingLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        if url.as_str() == self.stall_on {
            self.inner.calls.record(url);
            return futures::future::pending().await;
        }
        self.inner.load(url).await
    }
}

/// Always fails
#[derive(Debug, Default)]
pub struct FailingLoader {
    pub calls: CallLog,
}

impl Loader for FailingLoader {
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        self.calls.record(url);
        Err(LoadError::Other("always fail".to_string()))
    }
}
