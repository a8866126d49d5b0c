// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate the seed URL and build the crawl configuration
//    (the only fatal errors live here, before any crawling starts)
// 3. Wire Ctrl-C to a graceful cancellation of the crawl
// 4. Run the crawl and print the summary (table or JSON)
//
// Rust concepts used:
// - async/await: Because crawling is network-bound
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Arc: Shared ownership so the Ctrl-C task can reach the crawler
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - frontier + traversal controller (the core)
mod extract;  // src/extract/ - HTML title/link extraction
mod fetch;    // src/fetch/ - polite HTTP fetching
mod sink;     // src/sink/ - per-domain record files

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use crawl::{CrawlConfig, CrawlSummary, Crawler};
use fetch::HttpFetcher;
use sink::FileSink;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Configuration problems surface here, before any crawling
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Only startup errors (bad seed URL, unwritable output directory) bubble
// up from here; everything that goes wrong during the crawl itself is
// contained inside the controller and merely reflected in the summary.
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let config = CrawlConfig::new(&cli.start_url, cli.external, cli.max_depth, cli.concurrency)?;
    let fetcher = HttpFetcher::new(Duration::from_millis(cli.delay_ms))?;
    let output_sink = FileSink::new(&cli.output_dir)?;

    println!("🔍 Crawling from: {}", config.start_url);
    match config.max_depth {
        Some(depth) => println!("📊 Max depth: {}", depth),
        None => println!("📊 Max depth: unlimited"),
    }
    if config.allow_external {
        println!("🌐 Scope: all domains");
    } else {
        println!("🌐 Scope: {} only", config.seed_domain);
    }
    println!();

    let crawler = Arc::new(Crawler::new(config, fetcher, output_sink));

    // Ctrl-C stops claiming new URLs; in-flight fetches finish and the
    // partial summary still gets printed
    {
        let crawler = Arc::clone(&crawler);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("\n⛔ Interrupted - finishing in-flight fetches...");
                crawler.cancel();
            }
        });
    }

    let summary = crawler.run().await;

    println!();
    if cli.json {
        // Serialize the summary to JSON and print
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary, &cli.output_dir);
    }

    Ok(0)
}

// Prints the human-readable end-of-run report
fn print_summary(summary: &CrawlSummary, output_dir: &str) {
    println!("📊 Crawl summary:");
    println!("   ✅ Pages crawled: {}", summary.pages_crawled);
    println!("   ❌ Fetch failures: {}", summary.fetch_failures);
    if summary.persist_failures > 0 {
        println!("   ⚠️  Records lost: {}", summary.persist_failures);
    }
    println!("   🔗 Links discovered: {}", summary.urls_discovered);
    println!("   ⏱️  Elapsed: {:.1}s", summary.elapsed_secs);
    println!("   📁 Records written under: {}", output_dir);
}
