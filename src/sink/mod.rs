// src/sink/mod.rs
// =============================================================================
// The metadata sink: durably records one PageRecord per crawled page.
//
// Like the fetch service, the sink sits behind a trait so the crawl engine
// can be tested with an in-memory sink instead of real files.
// =============================================================================

mod file;

pub use file::FileSink;

use anyhow::Result;

use crate::crawl::PageRecord;

// Anything that can durably record a crawled page
//
// Append-only: a later failure must never lose records persisted earlier.
pub trait MetadataSink {
    async fn persist(&self, record: &PageRecord) -> Result<()>;
}
