// src/fetch/mod.rs
// =============================================================================
// The fetch service: turns a URL into page content, or fails trying.
//
// The `PageFetcher` trait is the seam between the crawl engine and the
// network - the controller only ever talks to the trait, so tests swap in
// a canned-HTML fetcher and never touch a socket.
//
// Politeness (request delays) and identity rotation live entirely inside
// the HTTP implementation; the controller sees nothing of them but the
// latency.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use anyhow::Result;

// Anything that can fetch the content of a page
//
// Must fail (never silently return empty content) on network errors,
// timeouts, and non-2xx HTTP statuses.
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
