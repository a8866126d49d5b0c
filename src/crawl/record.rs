// src/crawl/record.rs
// =============================================================================
// Data types shared by the crawl engine:
//
// - CrawlConfig: everything the controller needs to know for one run,
//   validated once at startup and immutable afterwards
// - PageRecord: the result of successfully crawling one page, handed to
//   the metadata sink
// - CrawlSummary / PageOutcome: the run report printed (or serialized to
//   JSON) when the crawl finishes
// =============================================================================

use anyhow::{anyhow, Result};
use serde::Serialize;
use url::Url;

// Configuration for one crawl run
//
// Built from the CLI arguments in main.rs. The seed domain is extracted
// here once so the scope policy can compare plain strings later.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts (depth 0)
    pub start_url: Url,
    /// Host of the start URL; the scope boundary when external is off
    pub seed_domain: String,
    /// Whether links to other domains may be followed
    pub allow_external: bool,
    /// Maximum link-hops from the seed; None = unlimited
    pub max_depth: Option<usize>,
    /// How many fetches may be in flight at once (at least 1)
    pub concurrency: usize,
}

impl CrawlConfig {
    // Validates the seed URL and builds a config
    //
    // This is the only place a bad configuration can surface; it fails
    // before any crawling begins. An unparseable URL or one without a
    // host (like file:///tmp) is rejected with a clear message.
    pub fn new(
        start_url: &str,
        allow_external: bool,
        max_depth: Option<usize>,
        concurrency: usize,
    ) -> Result<Self> {
        let mut start = Url::parse(start_url)
            .map_err(|e| anyhow!("Invalid start URL '{}': {}", start_url, e))?;

        // Fragments never reach the server, so the seed is normalized the
        // same way discovered links are
        start.set_fragment(None);

        let seed_domain = start
            .host_str()
            .ok_or_else(|| anyhow!("Start URL has no host: {}", start_url))?
            .to_string();

        Ok(CrawlConfig {
            start_url: start,
            seed_domain,
            allow_external,
            max_depth,
            concurrency: concurrency.max(1),
        })
    }
}

// The metadata recorded for one successfully crawled page
//
// `links` is the page's full cleaned link list as extracted - it is NOT
// filtered by scope or depth. Only the subset that passes the scope policy
// drives further traversal; the record always shows everything the page
// linked to.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub url: String,
    pub title: String,
    pub links: Vec<String>,
}

impl PageRecord {
    pub fn new(url: String, title: String, links: Vec<String>) -> Self {
        PageRecord { url, title, links }
    }
}

// One line of the final report, per crawled page
#[derive(Debug, Clone, Serialize)]
pub struct PageOutcome {
    pub url: String,
    pub title: String,
    pub links_found: usize,
}

// The overall result of a crawl run
//
// #[derive(Serialize)] lets main.rs print this as JSON with --json
#[derive(Debug, Default, Serialize)]
pub struct CrawlSummary {
    /// Every page that was fetched and recorded, in completion order
    pub pages: Vec<PageOutcome>,
    /// Pages fetched, parsed and handed to the sink
    pub pages_crawled: usize,
    /// Pages abandoned because the fetch failed
    pub fetch_failures: usize,
    /// Records lost because the sink failed (traversal unaffected)
    pub persist_failures: usize,
    /// Total links seen across all crawled pages (before any filtering)
    pub urls_discovered: usize,
    /// Wall-clock duration of the run in seconds
    pub elapsed_secs: f64,
}

impl CrawlSummary {
    // Accounts for one successfully crawled page
    pub fn record_page(&mut self, record: &PageRecord) {
        self.pages.push(PageOutcome {
            url: record.url.clone(),
            title: record.title.clone(),
            links_found: record.links.len(),
        });
        self.pages_crawled += 1;
        self.urls_discovered += record.links.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_extracts_seed_domain() {
        let config = CrawlConfig::new("https://example.com/start", false, None, 4).unwrap();
        assert_eq!(config.seed_domain, "example.com");
        assert!(!config.allow_external);
    }

    #[test]
    fn test_config_strips_seed_fragment() {
        let config = CrawlConfig::new("https://example.com/page#top", false, None, 1).unwrap();
        assert_eq!(config.start_url.as_str(), "https://example.com/page");
    }

    #[test]
    fn test_config_rejects_garbage_url() {
        assert!(CrawlConfig::new("not a url", false, None, 1).is_err());
    }

    #[test]
    fn test_config_rejects_hostless_url() {
        assert!(CrawlConfig::new("file:///tmp/page.html", false, None, 1).is_err());
    }

    #[test]
    fn test_config_clamps_concurrency() {
        let config = CrawlConfig::new("https://example.com", false, None, 0).unwrap();
        assert_eq!(config.concurrency, 1);
    }

    #[test]
    fn test_summary_counts_pages_and_links() {
        let mut summary = CrawlSummary::default();
        let record = PageRecord::new(
            "https://example.com/".to_string(),
            "Home".to_string(),
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string(),
            ],
        );
        summary.record_page(&record);
        assert_eq!(summary.pages_crawled, 1);
        assert_eq!(summary.urls_discovered, 2);
        assert_eq!(summary.pages[0].links_found, 2);
    }
}
