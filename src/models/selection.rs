//! Set of labels chosen for the next combination.

use std::collections::BTreeSet;

use super::LabelStore;

/// Labels currently selected for generation.
///
/// Membership is by exact string. Keeping every member present in the
/// [`LabelStore`] is the owner's job; call [`SelectionSet::retain_existing`]
/// after any store mutation that can remove labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    members: BTreeSet<String>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Flips membership of a label. Returns `true` if it is now selected.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.members.remove(label) {
            false
        } else {
            self.members.insert(label.to_string());
            true
        }
    }

    /// Adds a label without toggling. Returns `true` if it was newly added.
    pub fn insert(&mut self, label: &str) -> bool {
        self.members.insert(label.to_string())
    }

    /// Replaces the whole selection with the given labels.
    pub fn select_all<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = labels.into_iter().map(Into::into).collect();
    }

    /// Empties the selection.
    pub fn deselect_all(&mut self) {
        self.members.clear();
    }

    /// Drops members that no longer exist in the store.
    ///
    /// Returns the number of stale labels removed.
    pub fn retain_existing(&mut self, store: &LabelStore) -> usize {
        let before = self.members.len();
        self.members.retain(|label| store.contains(label));
        before - self.members.len()
    }

    /// Returns `true` if the label is selected.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.members.contains(label)
    }

    /// Iterates selected labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(String::as_str)
    }

    /// Number of selected labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
