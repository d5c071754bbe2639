//! Bounded, deduplicated log of past generation results.

use std::collections::VecDeque;

use crate::constants::HISTORY_CAPACITY;

/// Most-recent-first history of generated strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log holding at most [`HISTORY_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Creates an empty log with a custom bound (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an entry at the front.
    ///
    /// An existing identical entry is moved rather than duplicated, and the
    /// oldest entries beyond capacity are dropped.
    pub fn record(&mut self, entry: &str) {
        self.entries.retain(|existing| existing != entry);
        self.entries.push_front(entry.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Entry at `index` (0 is the most recent).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates entries from most to least recent.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}
