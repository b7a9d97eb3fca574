//! Line-oriented user input.
//!
//! The shell and credential prompt read through the [`Prompter`] trait so a
//! scripted source can stand in for the terminal.

mod prompter;

pub use prompter::{Prompter, ScriptedPrompter, TerminalPrompter};
