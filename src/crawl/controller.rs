// src/crawl/controller.rs
// =============================================================================
// The traversal controller: the engine that drives the whole crawl.
//
// One `Crawler` owns the configuration and the two collaborators (a page
// fetcher and a metadata sink) and runs the fetch -> extract -> filter ->
// enqueue cycle until the frontier is exhausted:
//
// 1. Claim the next URL from the frontier (claiming marks it visited, so
//    every URL is fetched at most once per run)
// 2. Fetch it; on failure report and move on - one bad page never stops
//    the crawl
// 3. Extract the title and links from the HTML
// 4. Hand a PageRecord (with the FULL link list) to the sink; sink errors
//    are reported and the crawl continues
// 5. Unless the page sits at the depth cutoff, enqueue each link that is
//    not yet visited and passes the scope policy, one hop deeper
//
// Concurrency: up to `config.concurrency` fetches run at once inside a
// FuturesUnordered driven by this single orchestrator task. Because the
// frontier is owned by the orchestrator, the visited check-and-mark needs
// no locks - two in-flight fetches can never race on the same URL. With
// concurrency 1 the traversal is strictly breadth-first; above 1 depth
// levels interleave as fetches complete out of order, which is an accepted
// relaxation.
//
// The run ends when nothing is claimable AND nothing is in flight - an
// in-flight fetch may still enqueue new work, so "queue empty" alone is
// not a termination condition.
// =============================================================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};

use crate::crawl::frontier::{Frontier, FrontierEntry};
use crate::crawl::record::{CrawlConfig, CrawlSummary, PageRecord};
use crate::crawl::scope;
use crate::extract::{self, ExtractedPage};
use crate::fetch::PageFetcher;
use crate::sink::MetadataSink;

// The crawl engine, generic over its collaborators so tests can swap in
// mocks without touching the traversal logic
pub struct Crawler<F, S> {
    config: CrawlConfig,
    fetcher: F,
    sink: S,
    cancelled: AtomicBool,
}

impl<F, S> Crawler<F, S>
where
    F: PageFetcher,
    S: MetadataSink,
{
    pub fn new(config: CrawlConfig, fetcher: F, sink: S) -> Self {
        Crawler {
            config,
            fetcher,
            sink,
            cancelled: AtomicBool::new(false),
        }
    }

    // Requests that the crawl stop claiming new URLs
    //
    // In-flight fetches are allowed to finish and their pages are still
    // recorded; run() then returns a partial summary. Safe to call from
    // another task (main wires this to Ctrl-C).
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    // Runs the crawl to completion (frontier exhausted or cancelled)
    //
    // Nothing that happens during traversal is fatal - fetch, extraction
    // and persist problems are all contained inside the loop, so this
    // always returns a summary.
    pub async fn run(&self) -> CrawlSummary {
        let started = Instant::now();

        let mut frontier = Frontier::new();
        frontier.enqueue(self.config.start_url.to_string(), 0);

        let mut summary = CrawlSummary::default();
        let mut in_flight = FuturesUnordered::new();

        loop {
            // Top up the pool from the frontier (unless we've been told
            // to stop, in which case we only drain what's already going)
            if !self.is_cancelled() {
                while in_flight.len() < self.config.concurrency {
                    match frontier.claim_next() {
                        Some(entry) => in_flight.push(self.process(entry)),
                        None => break,
                    }
                }
            }

            // Reap one completed fetch. None means nothing is in flight,
            // and since top-up ran first the frontier is drained too.
            match in_flight.next().await {
                Some((entry, result)) => {
                    self.handle_outcome(entry, result, &mut frontier, &mut summary)
                        .await;
                }
                None => break,
            }
        }

        if self.is_cancelled() {
            println!(
                "  Stopped early: {} URLs visited, {} still pending",
                frontier.visited_count(),
                frontier.pending_count()
            );
        }

        summary.elapsed_secs = started.elapsed().as_secs_f64();
        summary
    }

    // Fetches one claimed URL and extracts its title and links
    //
    // This is the unit of concurrency - several of these futures run at
    // once in the FuturesUnordered. It touches no shared state; all
    // bookkeeping happens back in handle_outcome on the orchestrator.
    async fn process(&self, entry: FrontierEntry) -> (FrontierEntry, Result<ExtractedPage>) {
        println!("  Crawling [depth {}]: {}", entry.depth, entry.url);

        match self.fetcher.fetch(&entry.url).await {
            Ok(html) => {
                let page = extract::extract_page(&html, &entry.url);
                (entry, Ok(page))
            }
            Err(e) => (entry, Err(e)),
        }
    }

    // Applies one fetch outcome to the frontier and the summary
    async fn handle_outcome(
        &self,
        entry: FrontierEntry,
        result: Result<ExtractedPage>,
        frontier: &mut Frontier,
        summary: &mut CrawlSummary,
    ) {
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                // The page is abandoned for this run; no retry
                eprintln!("  Warning: failed to fetch {}: {:#}", entry.url, e);
                summary.fetch_failures += 1;
                return;
            }
        };

        // The record keeps the unfiltered link list; scope and depth only
        // decide what gets FOLLOWED, never what gets stored
        let record = PageRecord::new(entry.url.clone(), page.title, page.links);

        if let Err(e) = self.sink.persist(&record).await {
            // The record is lost but the links were already extracted,
            // so traversal carries on unharmed
            eprintln!("  Warning: failed to record {}: {:#}", record.url, e);
            summary.persist_failures += 1;
        }
        summary.record_page(&record);

        // Depth cutoff: a page AT max_depth is fetched and recorded, but
        // its children are never enqueued
        let expand = self.config.max_depth.map_or(true, |max| entry.depth < max);
        if !expand {
            return;
        }

        for link in &record.links {
            if frontier.is_visited(link) {
                continue;
            }
            if scope::is_eligible(link, &self.config.seed_domain, self.config.allow_external) {
                frontier.enqueue(link.clone(), entry.depth + 1);
            }
        }
    }
}
