//! Label source flags shared by the headless commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::ImportError;
use crate::session::Session;
use clap::Args;
use std::path::PathBuf;

/// Where the label list comes from.
#[derive(Debug, Clone, Args)]
pub struct LabelSourceArgs {
    /// Bulk-import labels from a text file (repeatable)
    #[arg(short, long = "import", value_name = "FILE")]
    pub imports: Vec<PathBuf>,

    /// Start from an empty list instead of the built-in catalog
    #[arg(long)]
    pub no_catalog: bool,
}

impl LabelSourceArgs {
    /// Loads the config file and builds a session from it plus these flags.
    ///
    /// Unlike startup imports from the config file, a file named on the
    /// command line must import cleanly.
    pub fn load_session(&self) -> CliResult<Session> {
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
        if self.no_catalog {
            config.labels.use_builtin_catalog = false;
        }

        let mut session = Session::from_config(&config)
            .map_err(|e| CliError::io(format!("Failed to load labels: {e:#}")))?;

        for path in &self.imports {
            session.import_file(path).map_err(|e| {
                if e.downcast_ref::<ImportError>().is_some() {
                    CliError::validation(format!("{e:#}"))
                } else {
                    CliError::io(format!("{e:#}"))
                }
            })?;
        }

        Ok(session)
    }
}
