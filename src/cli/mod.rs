//! CLI command handlers.
//!
//! Headless, scriptable access to label management and generation for
//! shell pipelines and automation.

pub mod common;
pub mod config;
pub mod generate;
pub mod labels;
pub mod sources;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use generate::GenerateArgs;
pub use labels::LabelsArgs;
pub use sources::LabelSourceArgs;
