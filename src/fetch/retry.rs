// src/fetch/retry.rs
// =============================================================================
// Bounded retry around any Loader.
//
// How it works:
// 1. Before every attempt (including the first) ask the backoff policy how
//    long to wait, and sleep for that long
// 2. Call the wrapped loader
// 3. On success, hand the stream straight back
// 4. On failure, try again until the attempt budget is spent, then return the
//    error from the LAST attempt
// =============================================================================

use std::time::Duration;

use tracing::warn;
use url::Url;

use super::loader::{Loader, PageStream};
use crate::error::LoadError;

/// A loader that retries failed loads with a backoff
#[derive(Debug, Clone)]
pub struct Retrying<L, B> {
    inner: L,
    backoff: B,
    max_attempts: u32,
}

// Wraps `loader` so each load is tried up to `max_attempts` times
//
// A budget below 1 still makes one attempt.
pub fn with_retry<L, B>(loader: L, backoff: B, max_attempts: u32) -> Retrying<L, B>
where
    L: Loader,
    B: Fn(u32) -> Duration + Send + Sync,
{
    Retrying {
        inner: loader,
        backoff,
        max_attempts: max_attempts.max(1),
    }
}

impl<L, B> Retrying<L, B> {
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl<L, B> Loader for Retrying<L, B>
where
    L: Loader,
    B: Fn(u32) -> Duration + Send + Sync,
{
    async fn load(&self, url: &Url) -> Result<PageStream, LoadError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            tokio::time::sleep((self.backoff)(attempt)).await;

            match self.inner.load(url).await {
                Ok(stream) => return Ok(stream),
                Err(err) if attempt >= self.max_attempts => return Err(err),
                Err(err) => {
                    warn!(%url, attempt, max_attempts = self.max_attempts, error = %err, "load failed, retrying");
                }
            }
        }
    }
}
