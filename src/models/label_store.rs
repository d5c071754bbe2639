//! Sorted, deduplicated master list of candidate labels.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Import payload contained nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportError {
    /// Every token was empty after splitting and trimming
    NoValidLabels,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoValidLabels => write!(f, "No valid labels found in the imported text"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Delimiter for bulk text: one or more commas or newlines.
fn delimiter() -> &'static Regex {
    static DELIMITER: OnceLock<Regex> = OnceLock::new();
    DELIMITER.get_or_init(|| Regex::new(r"[,\n]+").expect("delimiter pattern is valid"))
}

/// Splits raw bulk text into trimmed, non-empty tokens.
///
/// Tokens are returned in input order; duplicates are kept so callers can
/// decide how to merge them.
pub fn parse_bulk(raw: &str) -> Vec<&str> {
    delimiter()
        .split(raw)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// The master label list.
///
/// # Invariants
///
/// - Sorted lexicographically (case-sensitive `str` ordering)
/// - No duplicates (exact string match)
/// - No empty or whitespace-padded entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStore {
    labels: Vec<String>,
}

impl LabelStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a store from arbitrary labels, trimming, dropping empties and
    /// deduplicating.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        store.replace_all(labels);
        store
    }

    /// Adds a single label.
    ///
    /// Returns `true` if the label was inserted, `false` if it was empty after
    /// trimming or already present.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }

        match self.position(label) {
            Ok(_) => false,
            Err(index) => {
                self.labels.insert(index, label.to_string());
                true
            }
        }
    }

    /// Imports comma/newline separated text.
    ///
    /// Only labels not already present are added, and the batch is merged in
    /// one step. Returns the number of labels actually added, which may be 0
    /// when every token was a duplicate.
    pub fn import_bulk(&mut self, raw: &str) -> Result<usize, ImportError> {
        let tokens = parse_bulk(raw);
        if tokens.is_empty() {
            return Err(ImportError::NoValidLabels);
        }

        let before = self.labels.len();
        self.labels.extend(tokens.into_iter().map(String::from));
        self.normalize();
        let added = self.labels.len() - before;

        debug!(added, total = self.labels.len(), "bulk import merged");
        Ok(added)
    }

    /// Replaces the whole list.
    pub fn replace_all<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels = labels
            .into_iter()
            .map(|label| label.as_ref().trim().to_string())
            .filter(|label| !label.is_empty())
            .collect();
        self.normalize();
    }

    /// Removes a label. Returns `true` if it existed.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.position(label) {
            Ok(index) => {
                self.labels.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// Case-insensitive substring search over the labels, in store order.
    ///
    /// The returned iterator is lazy and can be cloned to restart it.
    #[must_use]
    pub fn search(&self, query: &str) -> Search<'_> {
        Search {
            inner: self.labels.iter(),
            needle: query.to_lowercase(),
        }
    }

    /// Returns `true` if the exact label is present.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.position(label).is_ok()
    }

    /// All labels in sorted order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Iterates labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` when the store holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Renders the store one label per line, for export.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.labels.join("\n")
    }

    fn position(&self, label: &str) -> Result<usize, usize> {
        self.labels.binary_search_by(|existing| existing.as_str().cmp(label))
    }

    fn normalize(&mut self) {
        self.labels.sort_unstable();
        self.labels.dedup();
    }
}

/// Lazy iterator returned by [`LabelStore::search`].
#[derive(Debug, Clone)]
pub struct Search<'a> {
    inner: std::slice::Iter<'a, String>,
    needle: String,
}

impl<'a> Iterator for Search<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.inner
            .by_ref()
            .map(String::as_str)
            .find(|label| needle.is_empty() || label.to_lowercase().contains(needle))
    }
}
