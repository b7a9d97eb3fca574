use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal, Write};

use inquire::{InquireError, Text};

use crate::ui::is_prompt_cancelled;

/// A source of user-entered lines.
pub trait Prompter {
    /// Shows `prompt` and reads one line without its line terminator.
    ///
    /// Returns `Ok(None)` when the user interrupts the prompt. Running out of
    /// input is an error of kind [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads from the process's standard input.
///
/// On a terminal this uses `inquire` prompts; piped input is read line by line.
pub struct TerminalPrompter {
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.interactive {
            read_inquire(prompt)
        } else {
            read_piped(prompt)
        }
    }
}

fn read_inquire(prompt: &str) -> io::Result<Option<String>> {
    match Text::new(prompt).prompt() {
        Ok(line) => Ok(Some(line)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(InquireError::IO(e)) => Err(e),
        Err(e) => Err(io::Error::other(e)),
    }
}

fn read_piped(prompt: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt} ")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        println!();
        return Err(end_of_input());
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")
}

/// Replays a fixed list of answers; behaves like end-of-input once they run out.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    /// `None` entries replay a user interrupt.
    answers: VecDeque<Option<String>>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| Some(a.into())).collect(),
            prompts: Vec::new(),
        }
    }

    /// Appends an interrupt (Ctrl+C) after the scripted answers.
    #[must_use]
    pub fn then_interrupt(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(end_of_input)
    }
}
