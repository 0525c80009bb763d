// src/fetch/backoff.rs
// =============================================================================
// Backoff policy for the retrying loader.
//
// A backoff policy is any function from "attempt number" (starting at 1) to
// "how long to wait before making that attempt".
// =============================================================================

use std::time::Duration;

/// Wait added for every attempt after the first
pub const BACKOFF_STEP: Duration = Duration::from_millis(500);

// Linear backoff: no wait before the first attempt, then 500ms more for each
// attempt after it.
//
//   attempt 1  -> 0ms
//   attempt 2  -> 500ms
//   attempt 11 -> 5000ms
pub fn simple_backoff(attempt: u32) -> Duration {
    BACKOFF_STEP * attempt.saturating_sub(1)
}
