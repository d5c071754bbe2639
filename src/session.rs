//! Application controller.
//!
//! [`Session`] owns every piece of mutable state: the label store, the
//! selection, the generator settings, the history and the current result.
//! Front ends (TUI and CLI) hold one session and go through its methods;
//! nothing else mutates the models directly.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::catalog;
use crate::config::Config;
use crate::constants::TAG_COUNT_FLOOR;
use crate::engine::{self, GenerationError};
use crate::models::{GeneratorSettings, HistoryLog, ImportError, LabelStore, SelectionSet};

/// Owned state of one running instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    labels: LabelStore,
    selection: SelectionSet,
    settings: GeneratorSettings,
    history: HistoryLog,
    current: Option<String>,
}

impl Session {
    /// Creates a session with the given labels and settings.
    #[must_use]
    pub fn new(labels: LabelStore, settings: GeneratorSettings) -> Self {
        Self {
            labels,
            selection: SelectionSet::new(),
            settings,
            history: HistoryLog::new(),
            current: None,
        }
    }

    /// Builds the startup session described by the configuration.
    ///
    /// Loads the built-in catalog when enabled, then each `import_on_start`
    /// file. A file that cannot be imported is logged and skipped.
    pub fn from_config(config: &Config) -> Result<Self> {
        let labels = if config.labels.use_builtin_catalog {
            catalog::load()?
        } else {
            LabelStore::new()
        };

        let mut session = Self::new(labels, config.generation);
        for path in &config.labels.import_on_start {
            match session.import_file(path) {
                Ok(added) => info!(path = %path.display(), added, "startup import"),
                Err(err) => warn!(path = %path.display(), "startup import skipped: {err:#}"),
            }
        }

        info!(
            labels = session.labels.len(),
            builtin = config.labels.use_builtin_catalog,
            "session ready"
        );
        Ok(session)
    }

    // === Labels ===

    /// The master label list.
    #[must_use]
    pub const fn labels(&self) -> &LabelStore {
        &self.labels
    }

    /// Adds one label and selects it if it was new.
    pub fn add_label(&mut self, raw: &str) -> bool {
        let added = self.labels.add(raw);
        if added {
            self.selection.insert(raw.trim());
            debug!(label = raw.trim(), "label added and selected");
        }
        added
    }

    /// Bulk-imports comma/newline separated text. Imported labels are not
    /// selected.
    pub fn import_text(&mut self, raw: &str) -> Result<usize, ImportError> {
        let added = self.labels.import_bulk(raw)?;
        info!(added, total = self.labels.len(), "labels imported");
        Ok(added)
    }

    /// Reads a text file and bulk-imports it.
    ///
    /// The extension is not checked. A payload with no usable tokens fails
    /// with an [`ImportError`] that can be recovered via `downcast_ref`.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file: {}", path.display()))?;
        let added = self
            .import_text(&content)
            .with_context(|| format!("Nothing to import from {}", path.display()))?;
        Ok(added)
    }

    /// Replaces the whole label list and prunes the selection.
    pub fn replace_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.labels.replace_all(labels);
        let dropped = self.selection.retain_existing(&self.labels);
        debug!(total = self.labels.len(), dropped, "labels replaced");
    }

    /// Removes one label and prunes the selection.
    pub fn remove_label(&mut self, label: &str) -> bool {
        let removed = self.labels.remove(label);
        if removed {
            self.selection.retain_existing(&self.labels);
        }
        removed
    }

    /// Labels one per line, as written by [`Session::export_file`].
    #[must_use]
    pub fn export_text(&self) -> String {
        self.labels.to_text()
    }

    /// Writes all labels to a plain text file.
    pub fn export_file(&self, path: &Path) -> Result<usize> {
        fs::write(path, self.export_text())
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;
        info!(path = %path.display(), count = self.labels.len(), "labels exported");
        Ok(self.labels.len())
    }

    // === Settings ===

    /// Current generator settings.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Mutable generator settings, for the sliders and CLI overrides.
    pub fn settings_mut(&mut self) -> &mut GeneratorSettings {
        &mut self.settings
    }

    // === Selection ===

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns `true` if the label is selected.
    #[must_use]
    pub fn is_selected(&self, label: &str) -> bool {
        self.selection.contains(label)
    }

    /// Flips a label's membership. Unknown labels are ignored.
    ///
    /// Returns `true` if the label is now selected.
    pub fn toggle(&mut self, label: &str) -> bool {
        if !self.labels.contains(label) {
            return false;
        }
        self.selection.toggle(label)
    }

    /// Replaces the selection with the given labels that exist in the store.
    pub fn select_all<'a, I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let store = &self.labels;
        self.selection
            .select_all(labels.into_iter().filter(|label| store.contains(label)));
    }

    /// Selects exactly the labels matching a search query.
    ///
    /// Returns the number of labels now selected.
    pub fn select_visible(&mut self, query: &str) -> usize {
        self.selection.select_all(self.labels.search(query));
        self.selection.len()
    }

    /// Empties the selection.
    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    /// Upper bound for the tag-count sliders.
    #[must_use]
    pub fn tag_count_limit(&self) -> usize {
        TAG_COUNT_FLOOR.max(self.selection.len())
    }

    // === Generation ===

    /// Runs the engine with the current selection and settings.
    ///
    /// On success the result becomes current and is recorded in history.
    /// On failure nothing changes.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&str, GenerationError> {
        let output = engine::generate(&self.selection, &self.settings, rng)?;
        self.history.record(&output);
        Ok(self.current.insert(output).as_str())
    }

    /// Runs the engine with the thread-local generator.
    pub fn generate(&mut self) -> Result<&str, GenerationError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// The most recent (or republished) result.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Past results, most recent first.
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Republishes a history entry as the current result without recording
    /// it again.
    pub fn select_history(&mut self, index: usize) -> Option<&str> {
        let entry = self.history.get(index)?.to_string();
        Some(self.current.insert(entry).as_str())
    }
}
