// src/crawl/mod.rs
// =============================================================================
// This module is the heart of page-scout: the crawl frontier and the
// traversal controller.
//
// Submodules:
// - record: config, page records and the run summary
// - frontier: the FIFO work queue plus the visited set (the dedup story)
// - scope: the pure domain-eligibility predicate
// - controller: the engine driving fetch -> extract -> filter -> enqueue
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application use.
// =============================================================================

mod controller;
mod frontier;
mod record;
mod scope;

// Re-export public items from submodules
// This lets users write `crawl::Crawler` instead of
// `crawl::controller::Crawler`
pub use controller::Crawler;
pub use record::{CrawlConfig, CrawlSummary, PageRecord};
