// src/extract/mod.rs
// =============================================================================
// This module turns raw HTML into the two things the crawler cares about:
// a page title and a cleaned list of absolute links.
// =============================================================================

mod html;

pub use html::{extract_page, ExtractedPage};
