// src/fetch/mod.rs
// =============================================================================
// Everything needed to turn an address into page bytes.
//
// Submodules:
// - loader: the Loader trait and the default HTTP GET loader
// - backoff: how long to wait before each attempt
// - retry: wraps a loader with bounded retries
// =============================================================================

mod backoff;
mod loader;
mod retry;

pub use backoff::{simple_backoff, BACKOFF_STEP};
pub use loader::{FetchSettings, HttpGetLoader, Loader, PageStream};
pub use retry::{with_retry, Retrying};
