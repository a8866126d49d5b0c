// src/extract/html.rs
// =============================================================================
// This module extracts a title and links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative URLs against the page's own URL
// - Strip fragments (#...) so two anchors into the same page compare equal
//
// Extraction never fails as a whole: any single anchor that can't be
// resolved is skipped and the rest of the page is still processed.
// =============================================================================

use std::collections::HashSet;

use scraper::{Html, Selector};
use url::Url;

// What we learned from one page
#[derive(Debug, Clone)]
pub struct ExtractedPage {
    /// The page's <title> text, or "No Title" when absent/empty
    pub title: String,
    /// Cleaned absolute links in document order, deduplicated within
    /// the page, fragments stripped, http/https only
    pub links: Vec<String>,
}

// Extracts the title and all links from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   base_url: the URL of the page itself (for resolving relative links)
pub fn extract_page(html: &str, base_url: &str) -> ExtractedPage {
    let document = Html::parse_document(html);
    ExtractedPage {
        title: extract_title(&document),
        links: extract_links(&document, base_url),
    }
}

// Pulls the text of the first <title> element, trimmed
fn extract_title(document: &Html) -> String {
    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("title").unwrap();

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "No Title".to_string())
}

// Collects every resolvable anchor href as a normalized absolute URL
//
// Within-page duplicates are dropped while preserving first-seen order,
// so `links` reads like the page does.
fn extract_links(document: &Html, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let selector = Selector::parse("a[href]").unwrap();

    // Parse the base URL once; without it relative links are meaningless
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("  Warning: invalid base URL: {}", base_url);
            return links;
        }
    };

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute) = resolve_href(&base, href) {
                if seen.insert(absolute.clone()) {
                    links.push(absolute);
                }
            }
        }
    }

    links
}

// Resolves a single href to a normalized absolute URL
//
// Returns None (the anchor is skipped, never an error) for:
// - same-page fragments (#section)
// - non-web schemes (mailto:, tel:, javascript:, data:)
// - anything that fails to resolve against the base
//
// Fragments on resolvable URLs are stripped: a link to
// "https://a.test/p#section" comes back as "https://a.test/p".
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();

    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
        || href.starts_with("data:")
    {
        return None;
    }

    // join() handles both relative and already-absolute hrefs
    let mut url = base.join(href).ok()?;
    url.set_fragment(None);

    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}
