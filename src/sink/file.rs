// src/sink/file.rs
// =============================================================================
// File-backed metadata sink: one append-only text file per crawled domain.
//
// Layout:
// - Files live under the output directory (created up front)
// - The filename is the domain with every non-alphanumeric character
//   replaced by '_', plus ".txt" - "docs.example.com" becomes
//   "docs_example_com.txt"
// - Each record is one human-readable block: URL, title, links, separator
//
// Append safety: files are only ever opened in append mode (never
// truncated), each record is assembled into a single buffer first, and a
// mutex serializes the writes - so concurrent persists can never
// interleave inside one record.
// =============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use url::Url;

use crate::crawl::PageRecord;
use crate::sink::MetadataSink;

pub struct FileSink {
    output_dir: PathBuf,
    // Serializes appends; held only for the duration of one record's write
    write_lock: Mutex<()>,
}

impl FileSink {
    // Creates the sink and its output directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        std::fs::create_dir_all(&output_dir)
            .with_context(|| format!("creating output directory {}", output_dir.display()))?;

        Ok(FileSink {
            output_dir,
            write_lock: Mutex::new(()),
        })
    }

    fn file_for(&self, domain: &str) -> PathBuf {
        self.output_dir.join(format!("{}.txt", sanitize_domain(domain)))
    }
}

// Maps a domain to a safe filename stem: non-alphanumerics become '_'
fn sanitize_domain(domain: &str) -> String {
    domain
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

// Renders one record as the textual block that gets appended
fn format_record(record: &PageRecord) -> String {
    let mut block = String::new();
    block.push_str(&format!("URL: {}\n", record.url));
    block.push_str(&format!("Title: {}\n", record.title));
    block.push_str("Links:\n");
    for link in &record.links {
        block.push_str(&format!("    {}\n", link));
    }
    block.push_str("--------------------------------------------------\n");
    block
}

impl MetadataSink for FileSink {
    async fn persist(&self, record: &PageRecord) -> Result<()> {
        // Which domain's file does this page belong in?
        let domain = Url::parse(&record.url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| "unknown".to_string());

        let path = self.file_for(&domain);
        let block = format_record(record);

        // One record = one guarded append; never truncate
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .await
            .with_context(|| format!("opening {}", path.display()))?;

        file.write_all(block.as_bytes())
            .await
            .with_context(|| format!("appending to {}", path.display()))?;
        file.flush().await?;

        Ok(())
    }
}
