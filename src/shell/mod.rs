//! The interactive menu shell.
//!
//! [`Shell`] owns a [`Translator`](crate::translation::Translator), a
//! [`Prompter`](crate::input::Prompter) and an output writer, and drives the
//! main menu, interactive translation, batch translation and the quick test.

/// Menu selector parsing.
pub mod menu;
mod session;
mod ui;

pub use session::{QUICK_TEST_SENTENCES, Shell};
pub use ui::{print_banner, print_interrupted};
