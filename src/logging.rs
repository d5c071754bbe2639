//! Tracing subscriber setup.
//!
//! `RUST_LOG` always wins over the defaults picked here.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside the config directory.
pub const LOG_FILE_NAME: &str = "tagmixer.log";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Logs to stderr for headless commands.
///
/// Quiet by default so stdout stays scriptable; `--verbose` turns on debug.
pub fn init_stderr(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialize logging")
}

/// Logs to `tagmixer.log` in `dir` so the TUI's screen is never written over.
///
/// If the file cannot be opened, logging stays off and the app runs anyway.
pub fn init_file(dir: &Path, verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    let path = dir.join(LOG_FILE_NAME);

    let file = std::fs::create_dir_all(dir).and_then(|()| {
        OpenOptions::new().create(true).append(true).open(&path)
    });
    let Ok(file) = file else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to initialize logging")
}
