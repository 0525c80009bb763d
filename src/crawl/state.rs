// src/crawl/state.rs
// =============================================================================
// State shared by all workers of ONE crawl.
//
// - SeenLog: addresses already dispatched, so nothing is fetched twice
// - ResultStore: page -> links found on it (plus why a page failed)
// - Outstanding: how many dispatched requests are not fully processed yet
//
// Each lock is held for a single read-modify-write and never across an
// .await, so a plain parking_lot::Mutex is enough.
// =============================================================================

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::Notify;
use url::Url;

/// Everything the response workers of one crawl share
#[derive(Debug)]
pub struct CrawlState {
    /// Deepest level to dispatch, 0 for no limit
    pub max_depth: usize,
    pub seen: SeenLog,
    pub results: ResultStore,
    pub outstanding: Outstanding,
}

impl CrawlState {
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            seen: SeenLog::new(),
            results: ResultStore::new(),
            outstanding: Outstanding::new(),
        }
    }

    pub fn exceeds_max_depth(&self, depth: usize) -> bool {
        self.max_depth > 0 && depth > self.max_depth
    }
}

/// Addresses for which a request has already been dispatched
#[derive(Debug, Default)]
pub struct SeenLog {
    seen: Mutex<HashSet<String>>,
}

impl SeenLog {
    pub fn new() -> Self {
        Self::default()
    }

    // Marks the address as seen
    //
    // Returns true if it was NOT seen before, i.e. the caller now owns the
    // request for it. The check and the insert happen under one lock.
    pub fn mark_if_unseen(&self, url: &Url) -> bool {
        self.seen.lock().insert(url.as_str().to_string())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.seen.lock().contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
struct Pages {
    links: BTreeMap<String, Vec<String>>,
    failures: BTreeMap<String, String>,
}

/// Visited page -> links discovered on it
#[derive(Debug, Default)]
pub struct ResultStore {
    pages: Mutex<Pages>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Records the outcome of one page
    //
    // `failure` is set when the page could not be fetched or read; its link
    // list is then empty. Returns false if the page was already recorded, in
    // which case nothing is overwritten.
    pub fn record(&self, page: &Url, links: &[Url], failure: Option<String>) -> bool {
        let key = page.as_str().to_string();
        let mut pages = self.pages.lock();

        if pages.links.contains_key(&key) {
            return false;
        }
        if let Some(reason) = failure {
            pages.failures.insert(key.clone(), reason);
        }
        pages
            .links
            .insert(key, links.iter().map(|l| l.as_str().to_string()).collect());
        true
    }

    pub fn len(&self) -> usize {
        self.pages.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Takes everything recorded so far, leaving the store empty
    pub fn take(&self) -> (BTreeMap<String, Vec<String>>, BTreeMap<String, String>) {
        let mut pages = self.pages.lock();
        let Pages { links, failures } = std::mem::take(&mut *pages);
        (links, failures)
    }
}

/// Counts requests that were dispatched but not fully processed
///
/// Incremented before a request is sent, decremented after its response has
/// been recorded AND every follow-up request has been counted. Reaching zero
/// therefore means no page anywhere still has discovery work pending.
#[derive(Debug, Default)]
pub struct Outstanding {
    count: AtomicUsize,
    idle: Notify,
}

impl Outstanding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    pub fn done(&self) {
        let previous = self.count.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(previous > 0, "outstanding work counter underflow");
        if previous == 1 {
            self.idle.notify_waiters();
        }
    }

    pub fn pending(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    // Resolves once the counter is at zero
    pub async fn wait(&self) {
        loop {
            // Register before checking so a wake-up between the two isn't lost
            let idle = self.idle.notified();
            if self.pending() == 0 {
                return;
            }
            idle.await;
        }
    }
}
