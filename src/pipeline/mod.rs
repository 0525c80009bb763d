// src/pipeline/mod.rs
// =============================================================================
// The URL pipeline every discovered link goes through before it can be
// crawled.
//
// Two kinds of stage:
// - modifiers rewrite one address (strip trailing slash, drop fragment)
// - filters drop addresses from a list (non-HTTP, duplicates, other domains)
//
// All modifiers run first, then the filters in a fixed order:
//   scheme filter -> dedupe -> same-domain (optional)
// Dedupe has to see the normalised strings, otherwise "page/" and "page#top"
// would both survive.
// =============================================================================

mod filter;
mod modifier;

use url::Url;

pub use filter::{dedupe_urls, filter_urls, remove_non_http_urls, same_domain_filter, UrlFilter};
pub use modifier::{modify_url, modify_urls, remove_fragment, remove_trailing_slash, UrlModifier};

/// An ordered set of modifiers and filters
pub struct UrlPipeline {
    modifiers: Vec<UrlModifier>,
    filters: Vec<UrlFilter>,
}

impl UrlPipeline {
    pub fn new(modifiers: Vec<UrlModifier>, filters: Vec<UrlFilter>) -> Self {
        Self { modifiers, filters }
    }

    // The standard pipeline for a crawl starting at `target`
    pub fn for_crawl(target: &Url, same_domain: bool) -> Self {
        let modifiers: Vec<UrlModifier> = vec![remove_trailing_slash, remove_fragment];

        let mut filters: Vec<UrlFilter> = vec![Box::new(remove_non_http_urls), Box::new(dedupe_urls)];
        if same_domain {
            filters.push(same_domain_filter(target));
        }

        Self::new(modifiers, filters)
    }

    // Normalises a single address without filtering it
    pub fn normalize(&self, url: &Url) -> Url {
        modify_url(url, &self.modifiers)
    }

    // Normalises every address, then filters the list
    pub fn apply(&self, urls: &[Url]) -> Vec<Url> {
        let modified = modify_urls(urls, &self.modifiers);
        filter_urls(modified, &self.filters)
    }
}

impl std::fmt::Debug for UrlPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlPipeline")
            .field("modifiers", &self.modifiers.len())
            .field("filters", &self.filters.len())
            .finish()
    }
}
