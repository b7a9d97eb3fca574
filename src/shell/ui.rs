//! Shell screens and messages.

use std::io::{self, Write};

use super::menu::{MAIN_MENU, TRANSLATE_MENU};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE_WIDTH: usize = 60;

pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        Style::header("NAIJA-VOICE TRANSLATOR"),
        Style::version(format!("v{VERSION}"))
    )?;
    writeln!(out, "AI-powered Nigerian Pidgin translation")?;
    writeln!(out, "{}", Style::hint("Powered by Google Gemini"))?;
    writeln!(out)
}

fn print_rule(out: &mut impl Write, ch: char) -> io::Result<()> {
    writeln!(out, "{}", Style::secondary(ch.to_string().repeat(RULE_WIDTH)))
}

pub fn print_section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    print_rule(out, '=')?;
    writeln!(out, "{}", Style::header(title))?;
    print_rule(out, '=')
}

pub fn print_separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    print_rule(out, '-')
}

fn print_entries(out: &mut impl Write, entries: &[(&str, &str)]) -> io::Result<()> {
    for (key, description) in entries {
        writeln!(out, "  {}  {description}", Style::command(key))?;
    }
    writeln!(out)
}

pub fn print_main_menu(out: &mut impl Write) -> io::Result<()> {
    print_section(out, "MAIN MENU")?;
    print_entries(out, MAIN_MENU)
}

pub fn print_translate_menu(out: &mut impl Write) -> io::Result<()> {
    print_section(out, "TRANSLATION MODE")?;
    writeln!(out, "{}", Style::label("Commands:"))?;
    print_entries(out, TRANSLATE_MENU)
}

pub fn print_invalid_choice(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} Invalid choice. Try again.", Style::error("✗"))
}

pub fn print_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", Style::error("✗"))
}

pub fn print_warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", Style::warning("!"))
}

pub fn print_result(out: &mut impl Write, label: &str, text: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {}",
        Style::success("✓"),
        Style::label(format!("{label}:")),
        Style::value(text)
    )
}

pub fn print_leave_translation(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Style::success("Thanks for using Naija-Voice!"))
}

pub fn print_goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Style::success("Goodbye!"))
}

pub fn print_interrupted(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        Style::success("Interrupted by user. Goodbye!")
    )
}
