// src/pipeline/filter.rs
// =============================================================================
// URL filters: take a list of addresses and drop the ones we don't want.
//
// Filters never rewrite entries and always keep the relative order of the
// entries they let through.
// =============================================================================

use std::collections::HashSet;

use url::Url;

/// Removes unwanted entries from a list of addresses
pub type UrlFilter = Box<dyn Fn(Vec<Url>) -> Vec<Url> + Send + Sync>;

// Runs the urls through every filter, in order
pub fn filter_urls(urls: Vec<Url>, filters: &[UrlFilter]) -> Vec<Url> {
    filters.iter().fold(urls, |urls, filter| filter(urls))
}

// Removes duplicates by comparing the string form, keeping the first one
pub fn dedupe_urls(urls: Vec<Url>) -> Vec<Url> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.as_str().to_string()))
        .collect()
}

// Removes urls that are not http or https (mailto:, tel:, javascript:, ...)
pub fn remove_non_http_urls(urls: Vec<Url>) -> Vec<Url> {
    urls.into_iter()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .collect()
}

// Builds a filter that only keeps urls with the same scheme and host (port
// included) as `target`
//
// Subdomains count as a different host.
pub fn same_domain_filter(target: &Url) -> UrlFilter {
    let scheme = target.scheme().to_string();
    let host = target.host_str().map(str::to_string);
    let port = target.port();

    Box::new(move |urls| {
        urls.into_iter()
            .filter(|url| {
                url.scheme() == scheme && url.host_str() == host.as_deref() && url.port() == port
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(raw: &[&str]) -> Vec<Url> {
        raw.iter().map(|s| Url::parse(s).unwrap()).collect()
    }

    fn strings(urls: Vec<Url>) -> Vec<String> {
        urls.into_iter().map(String::from).collect()
    }

    #[test]
    fn test_dedupe_removes_dupes() {
        let got = dedupe_urls(urls(&[
            "https://test.com",
            "https://test.com/",
            "https://test.com/about",
            "https://test.com/contact",
            "https://test.com/about",
        ]));
        assert_eq!(
            strings(got),
            vec![
                "https://test.com/",
                "https://test.com/about",
                "https://test.com/contact"
            ]
        );
    }

    #[test]
    fn test_remove_non_http() {
        let got = remove_non_http_urls(urls(&[
            "mailto:test@localhost",
            "tel:00000000000",
            "https://test.com",
            "http://test.com",
            "ftp://test.com/file",
        ]));
        assert_eq!(strings(got), vec!["https://test.com/", "http://test.com/"]);
    }

    #[test]
    fn test_same_domain_removes_different_scheme() {
        let filter = same_domain_filter(&Url::parse("https://test.com").unwrap());
        let got = filter(urls(&["https://test.com", "http://test.com"]));
        assert_eq!(strings(got), vec!["https://test.com/"]);
    }

    #[test]
    fn test_same_domain_includes_different_paths() {
        let filter = same_domain_filter(&Url::parse("https://test.com").unwrap());
        let got = filter(urls(&["https://test.com", "https://test.com/contact"]));
        assert_eq!(
            strings(got),
            vec!["https://test.com/", "https://test.com/contact"]
        );
    }

    #[test]
    fn test_same_domain_removes_other_hosts() {
        let filter = same_domain_filter(&Url::parse("https://test.com").unwrap());
        let got = filter(urls(&[
            "https://test.com",
            "https://test.net",
            "https://sub.test.com",
            "https://test.com:8443/",
        ]));
        assert_eq!(strings(got), vec!["https://test.com/"]);
    }

    #[test]
    fn test_filters_run_in_order() {
        let filters: Vec<UrlFilter> = vec![
            Box::new(dedupe_urls),
            Box::new(remove_non_http_urls),
            same_domain_filter(&Url::parse("https://test.com").unwrap()),
        ];
        let got = filter_urls(
            urls(&[
                "https://test.com",
                "https://test.com",
                "mailto:test@localhost",
                "https://sub.test.com",
            ]),
            &filters,
        );
        assert_eq!(strings(got), vec!["https://test.com/"]);
    }
}
