//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the tagmixer binary
pub fn tagmixer_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tagmixer")
}

/// Creates an empty config directory that lives as long as the returned guard.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Builds a command whose config directory and working directory are both
/// the given temp dir, so nothing leaks into the user's real settings.
pub fn isolated_command(args: &[&str], dir: &Path) -> Command {
    let mut cmd = Command::new(tagmixer_bin());
    cmd.env("TAGMIXER_CONFIG_DIR", dir);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

/// Runs a command and returns its output.
pub fn run(args: &[&str], dir: &Path) -> Output {
    isolated_command(args, dir)
        .output()
        .expect("Failed to execute command")
}

/// Writes a labels file into `dir` and returns its path.
pub fn write_labels_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write labels file");
    path
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
