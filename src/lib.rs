//! Artist Tag Mixer Library
//!
//! This library provides the label store, selection and settings models,
//! the weighted tag generation engine, the session that ties them together,
//! and both front ends (the TUI and the headless CLI).

// Module declarations
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod models;
pub mod session;
pub mod shortcuts;
pub mod tui;
