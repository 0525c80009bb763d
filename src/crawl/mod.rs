// src/crawl/mod.rs
// =============================================================================
// The crawl engine.
//
// Features:
// - Two pools of concurrent workers (fetching / bookkeeping) joined by channels
// - Every discovered address is fetched at most once
// - Optional depth limit and same-domain restriction
// - Terminates when no page anywhere has pending discovery work
// - Optional deadline / cancellation returning a partial result
//
// Submodules:
// - options: crawl configuration and seed validation
// - request: the messages passed between the pools
// - state: seen log, result store and outstanding-work counter
// - worker: the request and response workers
// - engine: wires it all together
// - result: what the caller gets back
// =============================================================================

mod engine;
mod options;
mod request;
mod result;
mod state;
mod worker;

pub use engine::crawl;
pub use options::{parse_target, validate_target, CrawlOptions, DEFAULT_WORKERS};
pub use request::{CrawlRequest, CrawlResponse};
pub use result::CrawlResult;
pub use state::{CrawlState, Outstanding, ResultStore, SeenLog};
