// src/extract/html.rs
// =============================================================================
// This module extracts raw link targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup never makes parsing fail
//
// Links are returned exactly as written in the page. Resolving them against
// the page address and deciding which ones to follow is the crawl engine's
// job, not ours.
// =============================================================================

use std::collections::HashSet;

use futures::TryStreamExt;
use scraper::{Html, Selector};

use super::Extractor;
use crate::error::ExtractError;
use crate::fetch::PageStream;

/// Extracts `href` values of anchor tags
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl Extractor for HtmlExtractor {
    async fn extract(&self, mut page: PageStream) -> Result<Vec<String>, ExtractError> {
        // Read the whole body first; a chunk that fails to arrive fails the page
        let mut body = Vec::new();
        while let Some(chunk) = page.try_next().await? {
            body.extend_from_slice(&chunk);
        }

        // Pages aren't always valid UTF-8, replace bad bytes instead of failing
        let html = String::from_utf8_lossy(&body);
        Ok(extract_html_links(&html))
    }
}

// Extracts all anchor targets from HTML content
//
// Parameters:
//   html: the HTML content to parse
//
// Returns: the href values in document order, with empty values and exact
// duplicates removed (first occurrence wins)
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='/docs'>Again</a>"
//   result = ["/docs"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() {
            continue;
        }
        if seen.insert(href) {
            links.push(href.to_string());
        }
    }

    links
}
