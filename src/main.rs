//! Artist Tag Mixer - terminal workspace for weighted artist-tag prompts
//!
//! Without a subcommand the interactive TUI starts. Subcommands run the same
//! engine headless for scripting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tagmixer::cli::{ConfigArgs, GenerateArgs, LabelsArgs};
use tagmixer::config::Config;
use tagmixer::constants::APP_NAME;
use tagmixer::{logging, tui};

/// Artist Tag Mixer - combine artist labels into weighted prompt tags
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate tag combinations without the TUI
    Generate(GenerateArgs),
    /// List or export the label list
    Labels(LabelsArgs),
    /// Show or change saved settings
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        if let Err(e) = logging::init_stderr(cli.verbose) {
            eprintln!("Warning: {e}");
        }

        let result = match command {
            Commands::Generate(args) => args.execute(),
            Commands::Labels(args) => args.execute(),
            Commands::Config(args) => args.execute(),
        };

        if let Err(e) = result {
            eprintln!("Error: {e}");
            std::process::exit(e.code.code());
        }
        return;
    }

    if let Err(e) = run_interactive(cli.verbose) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_interactive(verbose: bool) -> Result<()> {
    let config = Config::load()?;

    let log_dir = Config::config_dir()?;
    if let Err(e) = logging::init_file(&log_dir, verbose) {
        eprintln!("Warning: {e}");
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting {APP_NAME}");

    tui::run(config)
}
