// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: the queue of discovered-but-not-yet-fetched URLs,
// plus the set of URLs we have already claimed for fetching.
//
// How the two structures cooperate:
// - enqueue() only pushes; it never marks anything visited. The same URL
//   discovered from several pages can therefore sit in the queue several
//   times.
// - claim_next() pops in FIFO order (that's what makes the crawl
//   breadth-first), silently discards entries whose URL was already
//   claimed, and marks the entry it returns as visited BEFORE the caller
//   ever fetches it.
//
// That ordering is the whole dedup story: because a URL enters the visited
// set at claim time, it can be fetched at most once per run no matter how
// many times or from how many pages it was discovered.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// =============================================================================

use std::collections::{HashSet, VecDeque};

// One unit of pending work: a URL and how many link-hops it sits from
// the seed (the seed itself is depth 0)
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub url: String,
    pub depth: usize,
}

// Owned by a single crawl run; a second Frontier is a second independent
// crawl with no shared state
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Frontier::default()
    }

    // Adds a discovered URL to the back of the queue
    //
    // Deliberately does NOT check or touch the visited set - duplicates in
    // the queue are fine and get dropped lazily by claim_next()
    pub fn enqueue(&mut self, url: String, depth: usize) {
        self.queue.push_back(FrontierEntry { url, depth });
    }

    // Claims the next URL to fetch, or None if the queue is drained
    //
    // Pops FIFO, skipping anything already visited. The returned entry's
    // URL is inserted into the visited set here, before any fetch is
    // attempted - this is the at-most-one-fetch enforcement point.
    pub fn claim_next(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.queue.pop_front() {
            // insert() returns false if the URL was already present,
            // which means this queue entry is a stale duplicate
            if self.visited.insert(entry.url.clone()) {
                return Some(entry);
            }
        }
        None
    }

    // Has this URL already been claimed for fetching?
    //
    // Used by the controller to avoid re-enqueueing links back to pages
    // we have already processed (cheap, but claim_next() would catch
    // them anyway)
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is VecDeque?
//    - A double-ended queue
//    - push_back() adds to the end, pop_front() removes from the start
//    - FIFO order is exactly breadth-first search: everything at depth d
//      comes out before anything at depth d+1
//
// 2. What is HashSet?
//    - A set of unique items with O(1) membership checks
//    - insert() doubles as check-and-mark: it returns whether the value
//      was newly added, so "already visited?" and "mark visited" happen
//      in one operation
//
// 3. Why mark visited at claim time instead of enqueue time?
//    - A link found on five pages gets enqueued five times
//    - Marking at enqueue would need the visited check in two places
//    - Marking at claim keeps one authoritative spot and still guarantees
//      a single fetch per URL
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_is_fifo() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.test/1".to_string(), 0);
        frontier.enqueue("https://a.test/2".to_string(), 1);
        assert_eq!(frontier.claim_next().unwrap().url, "https://a.test/1");
        assert_eq!(frontier.claim_next().unwrap().url, "https://a.test/2");
        assert!(frontier.claim_next().is_none());
    }

    #[test]
    fn test_duplicate_entries_claimed_once() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.test/page".to_string(), 1);
        frontier.enqueue("https://a.test/page".to_string(), 1);
        frontier.enqueue("https://a.test/page".to_string(), 2);

        let first = frontier.claim_next().unwrap();
        assert_eq!(first.url, "https://a.test/page");
        assert_eq!(first.depth, 1);
        // The later duplicates are dropped, not returned
        assert!(frontier.claim_next().is_none());
    }

    #[test]
    fn test_claim_marks_visited_immediately() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.test/".to_string(), 0);
        assert!(!frontier.is_visited("https://a.test/"));
        frontier.claim_next().unwrap();
        assert!(frontier.is_visited("https://a.test/"));
    }

    #[test]
    fn test_enqueue_does_not_mark_visited() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.test/".to_string(), 0);
        assert!(!frontier.is_visited("https://a.test/"));
        assert_eq!(frontier.pending_count(), 1);
    }

    #[test]
    fn test_independent_frontiers_do_not_share_state() {
        let mut first = Frontier::new();
        let mut second = Frontier::new();
        first.enqueue("https://a.test/".to_string(), 0);
        second.enqueue("https://a.test/".to_string(), 0);
        first.claim_next().unwrap();
        // The second crawl's frontier is unaffected by the first's visits
        assert!(second.claim_next().is_some());
    }
}
