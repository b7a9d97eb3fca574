use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use super::menu::{MenuChoice, ModeChoice, parse_menu_choice, parse_mode_choice};
use super::ui;
use crate::batch::BatchJob;
use crate::input::Prompter;
use crate::translation::{Direction, TextGenerator, Translator};
use crate::ui::{Spinner, Style, line_progress};

/// Sentences translated by the quick test.
pub const QUICK_TEST_SENTENCES: [&str; 3] = [
    "Good morning, how are you?",
    "I am going to the market",
    "This food is very delicious",
];

/// Whether the shell keeps going after a sub-mode returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// The user interrupted a prompt.
    Interrupted,
}

/// The interactive menu loop.
///
/// Owns the translator, the line source and the output sink; every sub-mode
/// borrows them from here.
pub struct Shell<G, P, W> {
    translator: Translator<G>,
    prompter: P,
    out: W,
    default_output: PathBuf,
}

impl<G, P, W> Shell<G, P, W>
where
    G: TextGenerator,
    P: Prompter,
    W: Write,
{
    pub const fn new(
        translator: Translator<G>,
        prompter: P,
        out: W,
        default_output: PathBuf,
    ) -> Self {
        Self {
            translator,
            prompter,
            out,
            default_output,
        }
    }

    pub const fn translator(&self) -> &Translator<G> {
        &self.translator
    }

    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Runs the main menu until the user quits or interrupts.
    ///
    /// Bad selections and failed requests are reported and the loop goes on;
    /// only I/O failures on the terminal itself are returned, including the
    /// end of standard input.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            ui::print_main_menu(&mut self.out)?;

            let Some(line) = self.read("Select option:")? else {
                ui::print_interrupted(&mut self.out)?;
                return Ok(());
            };

            let flow = match parse_menu_choice(&line) {
                MenuChoice::Quit => {
                    ui::print_goodbye(&mut self.out)?;
                    return Ok(());
                }
                MenuChoice::Interactive => self.translate_mode().await?,
                MenuChoice::Batch => self.batch_mode().await?,
                MenuChoice::QuickTest => {
                    self.quick_test().await?;
                    Flow::Continue
                }
                MenuChoice::Invalid(_) => {
                    ui::print_invalid_choice(&mut self.out)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Interrupted {
                ui::print_interrupted(&mut self.out)?;
                return Ok(());
            }
        }
    }

    fn read(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.flush()?;
        let line = self
            .prompter
            .read_line(prompt)
            .context("Failed to read input")?;
        Ok(line)
    }

    async fn translate_mode(&mut self) -> Result<Flow> {
        ui::print_translate_menu(&mut self.out)?;

        loop {
            ui::print_separator(&mut self.out)?;

            let Some(line) = self.read("Select mode (1/2/3/q):")? else {
                return Ok(Flow::Interrupted);
            };

            let direction = match parse_mode_choice(&line) {
                ModeChoice::Back => {
                    ui::print_leave_translation(&mut self.out)?;
                    return Ok(Flow::Continue);
                }
                ModeChoice::Invalid(_) => {
                    ui::print_invalid_choice(&mut self.out)?;
                    continue;
                }
                ModeChoice::ToPidgin => Some(Direction::ToPidgin),
                ModeChoice::ToEnglish => Some(Direction::ToEnglish),
                ModeChoice::AutoDetect => None,
            };

            let prompt = direction.map_or_else(
                || "Enter text (any language):".to_string(),
                |d| format!("{} text:", d.source_name()),
            );

            let Some(text) = self.read(&prompt)? else {
                return Ok(Flow::Interrupted);
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            match direction {
                Some(direction) => self.translate_and_print(text, direction).await?,
                None => self.detect_and_translate(text).await?,
            }
        }
    }

    async fn translate_and_print(&mut self, text: &str, direction: Direction) -> Result<()> {
        let spinner = Spinner::new(&format!("Translating to {}...", direction.target_name()));
        let result = self.translator.try_translate(text, direction).await;
        spinner.stop();

        match result {
            Ok(translation) => {
                ui::print_result(&mut self.out, direction.target_name(), &translation)?;
            }
            Err(e) => {
                ui::print_error(&mut self.out, &format!("Translation failed: {e}"))?;
            }
        }
        Ok(())
    }

    async fn detect_and_translate(&mut self, text: &str) -> Result<()> {
        let spinner = Spinner::new("Detecting language...");
        let language = self.translator.detect_language(text).await;
        spinner.stop();

        ui::print_result(
            &mut self.out,
            "Detected",
            &language.as_str().to_uppercase(),
        )?;

        match language.translate_direction() {
            Some(direction) => self.translate_and_print(text, direction).await,
            None => {
                ui::print_warning(
                    &mut self.out,
                    "Language unclear. Choose mode 1 or 2 manually.",
                )?;
                Ok(())
            }
        }
    }

    async fn batch_mode(&mut self) -> Result<Flow> {
        ui::print_section(&mut self.out, "BATCH MODE")?;

        let Some(input) = self.read("Input file path:")? else {
            return Ok(Flow::Interrupted);
        };
        let input = PathBuf::from(input.trim());
        if !input.exists() {
            ui::print_error(
                &mut self.out,
                &format!("File not found: {}", input.display()),
            )?;
            return Ok(Flow::Continue);
        }

        let prompt = format!(
            "Output file path (default: {}):",
            self.default_output.display()
        );
        let Some(output) = self.read(&prompt)? else {
            return Ok(Flow::Interrupted);
        };
        let output = match output.trim() {
            "" => self.default_output.clone(),
            path => PathBuf::from(path),
        };

        let Some(mode) = self.read("Translate to (pidgin/english):")? else {
            return Ok(Flow::Interrupted);
        };
        let direction = match mode.parse::<Direction>() {
            Ok(direction) => direction,
            Err(e) => {
                ui::print_error(&mut self.out, &e.to_string())?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.out)?;
        writeln!(self.out, "Processing {}...", input.display())?;
        self.out.flush()?;

        let job = BatchJob {
            input,
            output,
            direction,
        };
        let progress = line_progress(0);

        match job.run(&self.translator, &progress).await {
            Ok(report) => {
                writeln!(self.out)?;
                writeln!(self.out, "{}", Style::success("Batch translation complete!"))?;
                writeln!(self.out, "Output saved to: {}", job.output.display())?;
                if report.failed > 0 {
                    ui::print_warning(
                        &mut self.out,
                        &format!(
                            "{} of {} lines failed and contain [ERROR: ...] placeholders",
                            report.failed, report.lines
                        ),
                    )?;
                }
            }
            Err(e) => {
                ui::print_error(&mut self.out, &format!("Batch processing error: {e:#}"))?;
            }
        }

        Ok(Flow::Continue)
    }

    async fn quick_test(&mut self) -> Result<()> {
        ui::print_section(&mut self.out, "QUICK TEST")?;

        for sentence in QUICK_TEST_SENTENCES {
            let spinner = Spinner::new("Translating to Pidgin...");
            let pidgin = self.translator.translate_to_pidgin(sentence).await;
            spinner.stop();

            writeln!(self.out)?;
            writeln!(self.out, "English: {sentence}")?;
            writeln!(self.out, "Pidgin:  {pidgin}")?;
        }
        Ok(())
    }
}
