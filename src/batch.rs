//! File-to-file translation of newline-delimited text.

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::translation::{Direction, TextGenerator, Translator, error_placeholder};

/// Outcome of a completed batch pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Number of lines written.
    pub lines: usize,
    /// Lines whose translation failed and hold an `[ERROR: ...]` placeholder.
    pub failed: usize,
}

/// One input file translated line by line into one output file.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub direction: Direction,
}

impl BatchJob {
    /// Reads the input, translates every line in order, then writes the output.
    ///
    /// Nothing is written unless the whole pass succeeds.
    pub async fn run<G: TextGenerator>(
        &self,
        translator: &Translator<G>,
        progress: &ProgressBar,
    ) -> Result<BatchReport> {
        let contents = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read file: {}", self.input.display()))?;

        let lines: Vec<&str> = contents.lines().collect();
        progress.set_length(lines.len() as u64);

        let (translated, failed) =
            translate_lines(translator, &lines, self.direction, || progress.inc(1)).await;
        progress.finish_and_clear();

        atomic_write(&self.output, &translated.join("\n"))?;

        Ok(BatchReport {
            lines: translated.len(),
            failed,
        })
    }
}

/// Translates each line independently, one request at a time.
///
/// Blank lines stay blank, so the output has exactly as many lines as the
/// input. Returns the translated lines and the number that failed.
pub async fn translate_lines<G, F>(
    translator: &Translator<G>,
    lines: &[&str],
    direction: Direction,
    mut on_line: F,
) -> (Vec<String>, usize)
where
    G: TextGenerator,
    F: FnMut(),
{
    let mut translated = Vec::with_capacity(lines.len());
    let mut failed = 0;

    for line in lines {
        let line = line.trim();
        let result = if line.is_empty() {
            String::new()
        } else {
            match translator.try_translate(line, direction).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "batch line translation failed");
                    failed += 1;
                    error_placeholder(&e)
                }
            }
        };
        translated.push(result);
        on_line();
    }

    (translated, failed)
}
