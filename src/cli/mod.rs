//! Command-line interface definitions and startup.

/// Startup sequence: config, credential, client, shell.
pub mod app;

/// CLI argument parsing with clap.
pub mod args;

pub use args::Args;
