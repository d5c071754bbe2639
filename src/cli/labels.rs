//! Label list commands.

use crate::cli::common::{CliError, CliResult};
use crate::cli::sources::LabelSourceArgs;
use crate::constants::EXPORT_FILE_NAME;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Inspect and export the label list
#[derive(Args, Debug)]
pub struct LabelsArgs {
    #[command(subcommand)]
    command: LabelsCommand,
}

#[derive(Subcommand, Debug)]
enum LabelsCommand {
    /// Print labels, one per line
    List(LabelsListArgs),
    /// Write labels to a text file
    Export(LabelsExportArgs),
}

/// Print labels, one per line
#[derive(Args, Debug)]
pub struct LabelsListArgs {
    #[command(flatten)]
    sources: LabelSourceArgs,

    /// Only labels containing this text (case-insensitive)
    #[arg(long, value_name = "QUERY")]
    search: Option<String>,

    /// Print the number of matching labels instead
    #[arg(long)]
    count: bool,
}

/// Write labels to a text file
#[derive(Args, Debug)]
pub struct LabelsExportArgs {
    #[command(flatten)]
    sources: LabelSourceArgs,

    /// Output path (defaults to artist_tags.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl LabelsArgs {
    /// Execute labels subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            LabelsCommand::List(args) => args.execute(),
            LabelsCommand::Export(args) => args.execute(),
        }
    }
}

impl LabelsListArgs {
    /// Execute list command
    pub fn execute(&self) -> CliResult<()> {
        let session = self.sources.load_session()?;
        let matches = session.labels().search(self.search.as_deref().unwrap_or(""));

        if self.count {
            println!("{}", matches.count());
        } else {
            for label in matches {
                println!("{label}");
            }
        }

        Ok(())
    }
}

impl LabelsExportArgs {
    /// Execute export command
    pub fn execute(&self) -> CliResult<()> {
        let session = self.sources.load_session()?;
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));

        let count = session
            .export_file(&path)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Exported {count} labels to {}", path.display());
        Ok(())
    }
}
