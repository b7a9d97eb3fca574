//! # naija - English <-> Nigerian Pidgin translator
//!
//! `naija` is an interactive command-line translator that sends text to
//! Google Gemini and prints the model's translation.
//!
//! ## Features
//!
//! - **Two directions**: English → Pidgin and Pidgin → English
//! - **Auto-detect**: classify text as Pidgin, English or mixed, then translate
//! - **Batch mode**: translate a file line by line, preserving blank lines
//! - **Quick test**: try a few sample sentences
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="your-key"
//! naija
//!
//! # Use another model
//! naija --model gemini-2.5-flash
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/naija/config.toml`:
//!
//! ```toml
//! [naija]
//! model = "gemini-2.0-flash"
//! output = "output.txt"
//! ```
//!
//! The API key is only read from `GEMINI_API_KEY` or the startup prompt.

/// File-to-file batch translation.
pub mod batch;

/// Command-line interface definitions and startup.
pub mod cli;

/// Credential handling and the optional config file.
pub mod config;

/// Fatal and recoverable error types.
pub mod error;

/// File system utilities.
pub mod fs;

/// Line-oriented user input.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive menu shell.
pub mod shell;

/// Gemini client and the Pidgin translator.
pub mod translation;

/// Terminal UI components (spinner, progress, colors).
pub mod ui;
