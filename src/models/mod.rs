//! Data models for labels, selection, generation settings and history.
//!
//! Models are independent of the UI and of randomness; the engine and the
//! session build on top of them.

pub mod history;
pub mod label_store;
pub mod selection;
pub mod settings;

// Re-export all model types
pub use history::HistoryLog;
pub use label_store::{parse_bulk, ImportError, LabelStore, Search};
pub use selection::SelectionSet;
pub use settings::{GeneratorSettings, PrefixMode, WeightDistribution};
