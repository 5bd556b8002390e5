// src/checker/domain.rs
// =============================================================================
// This module works out the "registrable domain" of a URL.
//
// The registrable domain is the part of a hostname someone can actually buy:
//   www.medium.com        -> medium.com
//   news.bbc.co.uk        -> bbc.co.uk   (co.uk is a public suffix)
//
// Splitting on the last dot gets multi-part suffixes like "co.uk" wrong, so
// we look hosts up in the public suffix list bundled with the `psl` crate.
//
// Only the ICANN section of the list counts. Private entries such as
// github.io or blogspot.com are skipped, so every *.github.io site shares
// the registrable domain "github.io".
//
// Rust concepts:
// - Pattern matching on enums (url::Host has Domain/Ipv4/Ipv6 variants)
// - Option and the ? operator for "no answer" cases
// =============================================================================

use url::{Host, Url};

// Computes the Domain label of a URL string
//
// Returns:
//   - "name.suffix" for hosts under a known public suffix
//   - the bare host for IP literals and hosts with no recognised suffix
//     (e.g. "localhost")
//   - an empty string when the text has no host at all
//
// Example:
//   registrable_domain("https://www.medium.com/") -> "medium.com"
pub fn registrable_domain(url: &str) -> String {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(_) => return String::new(),
    };

    match parsed.host() {
        Some(Host::Domain(host)) => {
            let host = host.trim_end_matches('.');
            icann_domain(host).unwrap_or_else(|| host.to_string())
        }
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        None => String::new(),
    }
}

// "label.suffix" where suffix is the longest ICANN (non-private) suffix
//
// Returns None when the host is nothing but a suffix.
fn icann_domain(host: &str) -> Option<String> {
    let suffix_len = icann_suffix_len(host)?;
    let (head, suffix) = host.split_at(host.len() - suffix_len);
    let label = head.strip_suffix('.')?.rsplit('.').next()?;
    if label.is_empty() {
        return None;
    }
    Some(format!("{}.{}", label, suffix))
}

// Length of the host's public suffix, ignoring private-section rules
//
// When the matching rule is private ("github.io"), drop its leftmost label
// and look again until an ICANN (or default wildcard) rule matches.
fn icann_suffix_len(host: &str) -> Option<usize> {
    let mut rest = host;
    loop {
        let suffix = psl::suffix(rest.as_bytes())?;
        let len = suffix.as_bytes().len();
        if !matches!(suffix.typ(), Some(psl::Type::Private)) {
            return Some(len);
        }
        let private = &rest[rest.len() - len..];
        rest = private.split_once('.')?.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_subdomain() {
        assert_eq!(registrable_domain("https://www.medium.com/"), "medium.com");
    }

    #[test]
    fn test_multi_part_suffix() {
        assert_eq!(
            registrable_domain("https://news.bbc.co.uk/world"),
            "bbc.co.uk"
        );
    }

    #[test]
    fn test_private_suffixes_are_ignored() {
        assert_eq!(registrable_domain("https://alice.github.io/"), "github.io");
        assert_eq!(registrable_domain("https://bob.github.io/x"), "github.io");
        assert_eq!(registrable_domain("https://foo.blogspot.com/"), "blogspot.com");
        assert_eq!(registrable_domain("https://app.herokuapp.com/"), "herokuapp.com");
        assert_eq!(registrable_domain("https://site.netlify.app/"), "netlify.app");
        assert_eq!(
            registrable_domain("https://bucket.s3.amazonaws.com/key"),
            "amazonaws.com"
        );
    }

    #[test]
    fn test_bare_suffix_falls_back_to_host() {
        assert_eq!(registrable_domain("https://github.io/"), "github.io");
        assert_eq!(registrable_domain("https://co.uk/"), "co.uk");
    }

    #[test]
    fn test_ip_and_unlisted_hosts() {
        assert_eq!(registrable_domain("http://127.0.0.1:8080/x"), "127.0.0.1");
        assert_eq!(registrable_domain("http://localhost/"), "localhost");
    }

    #[test]
    fn test_unparseable_is_empty() {
        assert_eq!(registrable_domain("/relative/path"), "");
        assert_eq!(registrable_domain("mailto:someone@example.com"), "");
    }
}
