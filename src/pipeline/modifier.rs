// src/pipeline/modifier.rs
// =============================================================================
// URL modifiers: rewrite one address into its normalised form.
//
// A modifier works on a `&mut Url`, but callers never hand it their own
// value: modify_url clones first, so the caller's Url is left untouched.
// =============================================================================

use url::Url;

/// Rewrites a single address in place
pub type UrlModifier = fn(&mut Url);

// Returns a modified copy of `url`
pub fn modify_url(url: &Url, modifiers: &[UrlModifier]) -> Url {
    let mut modified = url.clone();
    for modify in modifiers {
        modify(&mut modified);
    }
    modified
}

// Returns modified copies of every url, in the same order
pub fn modify_urls(urls: &[Url], modifiers: &[UrlModifier]) -> Vec<Url> {
    urls.iter().map(|url| modify_url(url, modifiers)).collect()
}

// Removes the trailing slash from the path
//
// "https://test.com/page/" -> "https://test.com/page"
//
// A root path stays "/": http(s) URLs can't have an empty path.
pub fn remove_trailing_slash(url: &mut Url) {
    if url.cannot_be_a_base() {
        return;
    }

    let path = url.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return;
    }

    let trimmed = path.trim_end_matches('/').to_string();
    url.set_path(&trimmed);
}

// Removes the fragment ("#section") from the URL
pub fn remove_fragment(url: &mut Url) {
    url.set_fragment(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_no_mod_if_none_specified() {
        let original = url("https://test.com/page/#section");
        let got = modify_url(&original, &[]);
        assert_eq!(got, original);
    }

    #[test]
    fn test_runs_combined_modifiers_without_touching_input() {
        let original = url("https://test.com/page/#section");
        let got = modify_url(&original, &[remove_trailing_slash, remove_fragment]);

        assert_eq!(got.as_str(), "https://test.com/page");
        assert_eq!(original.as_str(), "https://test.com/page/#section");
    }

    #[test]
    fn test_remove_trailing_slash() {
        let mut u = url("https://test.com/some/page/?q=1");
        remove_trailing_slash(&mut u);
        assert_eq!(u.as_str(), "https://test.com/some/page?q=1");
    }

    #[test]
    fn test_root_path_is_kept() {
        let mut u = url("https://test.com/");
        remove_trailing_slash(&mut u);
        assert_eq!(u.as_str(), "https://test.com/");
    }

    #[test]
    fn test_repeated_slashes_are_all_removed() {
        let mut u = url("https://test.com/page//");
        remove_trailing_slash(&mut u);
        assert_eq!(u.as_str(), "https://test.com/page");
    }

    #[test]
    fn test_opaque_urls_are_untouched() {
        let mut u = url("mailto:test@localhost");
        remove_trailing_slash(&mut u);
        remove_fragment(&mut u);
        assert_eq!(u.as_str(), "mailto:test@localhost");
    }

    #[test]
    fn test_modifiers_are_idempotent() {
        let modifiers: [UrlModifier; 2] = [remove_trailing_slash, remove_fragment];
        for raw in [
            "https://test.com",
            "https://test.com/page/#top",
            "http://test.com/a/b/?x=1#y",
            "https://test.com/a//",
        ] {
            let once = modify_url(&url(raw), &modifiers);
            let twice = modify_url(&once, &modifiers);
            assert_eq!(once, twice, "not idempotent for {raw}");
        }
    }

    #[test]
    fn test_modify_urls_keeps_order() {
        let urls = vec![url("https://a.com/x/"), url("https://b.com/y#z")];
        let got = modify_urls(&urls, &[remove_trailing_slash, remove_fragment]);
        let got: Vec<&str> = got.iter().map(Url::as_str).collect();
        assert_eq!(got, vec!["https://a.com/x", "https://b.com/y"]);
    }
}
