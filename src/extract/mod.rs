// src/extract/mod.rs
// =============================================================================
// Link extraction: "given a page byte stream, produce the raw link targets".
//
// The crawl engine depends on the Extractor trait only; HtmlExtractor is the
// implementation used by the default crawler.
// =============================================================================

mod html;

use std::future::Future;

use crate::error::ExtractError;
use crate::fetch::PageStream;

pub use html::{extract_html_links, HtmlExtractor};

/// Turns a loaded page into the link targets written on it
///
/// Targets may be relative; the caller resolves them against the page address.
pub trait Extractor: Send + Sync {
    fn extract(
        &self,
        page: PageStream,
    ) -> impl Future<Output = Result<Vec<String>, ExtractError>> + Send;
}
