// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// page-scout has a single job (crawl one site), so there are no subcommands -
// just flags on the top-level command.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A value that may be absent (our unlimited-depth default)
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "page-scout",
    version = "0.1.0",
    about = "Crawl a website breadth-first and record per-page metadata",
    long_about = "page-scout starts from a seed URL and crawls linked pages breadth-first, \
                  recording each page's URL, title and outbound links to per-domain files. \
                  Crawling is polite (delayed, rotating identities) and bounded by depth and domain."
)]
pub struct Cli {
    /// The URL to start crawling from (e.g., https://example.com)
    ///
    /// Must be an absolute URL with a host; anything else aborts at startup
    #[arg(long)]
    pub start_url: String,

    /// Follow links to external domains too
    ///
    /// By default only pages on the seed URL's domain are crawled.
    /// This is an optional flag: --external
    #[arg(long)]
    pub external: bool,

    /// Maximum crawl depth (default: unlimited)
    ///
    /// Depth counts link hops from the seed (the seed itself is depth 0).
    /// A page at the maximum depth is still fetched and recorded, but its
    /// links are not followed.
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Directory where per-domain record files are written
    #[arg(long, default_value = "crawled_data")]
    pub output_dir: String,

    /// Output the crawl summary in JSON format instead of a table
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// How many pages to fetch concurrently
    ///
    /// 1 gives strictly breadth-first order; higher values are faster but
    /// interleave depth levels as fetches complete out of order
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// Politeness delay in milliseconds applied before every request
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<usize> for max_depth?
//    - Option represents a value that might not exist
//    - None = the user didn't pass --max-depth = crawl without a depth limit
//    - Some(n) = stop expanding pages deeper than n hops from the seed
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic (including --help and --version)
//    - Debug: generates code to print the struct for debugging
//
// 3. What does default_value_t do?
//    - Supplies a typed default when the flag is omitted
//    - default_value (no _t) takes a string and parses it instead
// -----------------------------------------------------------------------------
