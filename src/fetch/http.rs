// src/fetch/http.rs
// =============================================================================
// The real HTTP fetcher, built on reqwest.
//
// Key behavior:
// - One shared client (connection pooling, 10 second timeout, at most
//   5 redirects)
// - A politeness delay before every single request
// - A rotating User-Agent so consecutive requests don't present the same
//   identity
// - Non-2xx statuses are errors, same as transport failures - the caller
//   never has to guess whether empty content meant "empty page" or "404"
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::fetch::PageFetcher;

// Browser identities cycled across requests
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
];

pub struct HttpFetcher {
    client: Client,
    delay: Duration,
    next_agent: AtomicUsize,
}

impl HttpFetcher {
    // Builds the fetcher with its shared HTTP client
    //
    // `delay` is slept before every request - this is what keeps the
    // crawler polite no matter how fast pages come back
    pub fn new(delay: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(HttpFetcher {
            client,
            delay,
            next_agent: AtomicUsize::new(0),
        })
    }

    // Round-robins through USER_AGENTS
    fn next_user_agent(&self) -> &'static str {
        let n = self.next_agent.fetch_add(1, Ordering::Relaxed);
        USER_AGENTS[n % USER_AGENTS.len()]
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        // Polite crawling: wait before touching the network
        tokio::time::sleep(self.delay).await;

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.next_user_agent())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("HTTP {}", status));
        }

        let html = response.text().await?;
        Ok(html)
    }
}
