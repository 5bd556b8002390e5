// src/checker/html.rs
// =============================================================================
// This module finds the external links in an HTML page.
//
// We deliberately do NOT build a DOM here. Links are found with one regular
// expression that matches a lowercase `href` attribute with a double-quoted
// value:
//
//     href="..."    href = "..."    href ="..."
//
// Known limitations of this scan (kept on purpose so results are predictable):
// - `HREF="..."` (uppercase) is not matched
// - single-quoted and unquoted values are not matched
// - at most one whitespace character is allowed on each side of `=`
// - relative links are never resolved against the page URL
// - links injected by scripts are invisible
//
// Rust concepts:
// - LazyLock: Compile the regex once, the first time it's used
// - HashSet: Deduplicate links in O(1) per insert
// - Iterators: captures_iter + filter + collect
// =============================================================================

use super::domain::registrable_domain;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href\s?=\s?"([^"]+)""#).unwrap());

// Collects every distinct href value in the document
//
// Duplicates collapse; the returned set has no meaningful order.
pub fn extract_href_values(html: &str) -> HashSet<String> {
    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

// Returns the deduplicated set of external links found in `html`
//
// Parameters:
//   html: the page text
//   owner_domain: the Domain of the page itself (e.g. "medium.com", or the
//                 file stem "sample" for local files)
//
// A link is external when:
//   1. it starts with "http" (so http:// and https://, but not //cdn...)
//   2. its own Domain does NOT contain owner_domain as a substring
//
// Example:
//   owner_domain = "sample"
//   href="http://sample.com/x"    -> internal ("sample" is in "sample.com")
//   href="https://external.org/y" -> external
pub fn extract_external_links(html: &str, owner_domain: &str) -> HashSet<String> {
    extract_href_values(html)
        .into_iter()
        .filter(|link| is_external(link, owner_domain))
        .collect()
}

fn is_external(link: &str, owner_domain: &str) -> bool {
    if !link.starts_with("http") {
        return false;
    }
    !registrable_domain(link).contains(owner_domain)
}
