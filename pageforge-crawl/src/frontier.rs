//! Deduplicating FIFO frontier for breadth-first crawling.

use std::collections::HashSet;

/// URL queue that remembers everything it has ever seen.
///
/// URLs are visited in insertion order and a URL is only ever queued once,
/// even after it has been consumed. The backing list doubles as the record
/// of all discovered URLs.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: Vec<String>,
    seen: HashSet<String>,
    cursor: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a URL unless it was already added. Returns true if it was new.
    pub fn add(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if !self.seen.insert(url.clone()) {
            return false;
        }
        self.queue.push(url);
        true
    }

    /// Pop the next unvisited URL in FIFO order.
    pub fn next(&mut self) -> Option<String> {
        let url = self.queue.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(url)
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.queue.len()
    }

    /// Size of the visited set: every URL ever accepted, whether or not it
    /// has been dequeued yet.
    pub fn visited_count(&self) -> usize {
        self.seen.len()
    }

    /// Number of URLs handed out so far.
    pub fn processed_count(&self) -> usize {
        self.cursor
    }

    /// Every URL ever added, in discovery order.
    pub fn all(&self) -> &[String] {
        &self.queue
    }
}
