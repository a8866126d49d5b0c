// src/crawl/scope.rs
// =============================================================================
// The scope policy: decides whether a discovered URL may be enqueued.
//
// This is a pure function on purpose - no state, no side effects, safe to
// call from anywhere. The rule is exact host-string equality with the seed
// domain unless external crawling was requested. "docs.example.com" is NOT
// the same scope as "example.com"; there is no subdomain folding and the
// scheme plays no part in the comparison.
// =============================================================================

use url::Url;

// Is this URL eligible for enqueueing?
//
// Parameters:
//   candidate: the normalized absolute URL of a discovered link
//   seed_domain: the host of the crawl's start URL
//   allow_external: whether cross-domain links may be followed
//
// A URL whose host can't be determined is never eligible - we couldn't
// meaningfully fetch or record it anyway.
pub fn is_eligible(candidate: &str, seed_domain: &str, allow_external: bool) -> bool {
    let host = match Url::parse(candidate) {
        Ok(url) => match url.host_str() {
            Some(host) => host.to_string(),
            None => return false,
        },
        Err(_) => return false,
    };

    allow_external || host == seed_domain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_domain_is_eligible() {
        assert!(is_eligible("https://example.com/page", "example.com", false));
    }

    #[test]
    fn test_other_domain_is_not_eligible() {
        assert!(!is_eligible("https://other.com/page", "example.com", false));
    }

    #[test]
    fn test_external_flag_admits_everything() {
        assert!(is_eligible("https://other.com/page", "example.com", true));
        assert!(is_eligible("https://example.com/page", "example.com", true));
    }

    #[test]
    fn test_subdomains_are_not_folded() {
        assert!(!is_eligible("https://docs.example.com/", "example.com", false));
    }

    #[test]
    fn test_scheme_does_not_matter() {
        assert!(is_eligible("http://example.com/page", "example.com", false));
    }

    #[test]
    fn test_unparseable_url_is_never_eligible() {
        assert!(!is_eligible("not a url", "example.com", true));
    }
}
