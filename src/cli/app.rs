use anyhow::Result;
use std::io;

use super::Args;
use crate::config::{ConfigManager, ResolveOptions, acquire_api_key, resolve_config};
use crate::input::TerminalPrompter;
use crate::shell::{Shell, print_banner, print_interrupted};
use crate::translation::{GeminiClient, Translator};
use crate::ui::Style;

/// Starts the translator: banner, config, credential, client, then the menu.
///
/// Configuration and credential failures are returned before any request is made.
/// Interrupting the credential prompt ends the run successfully.
pub async fn run(args: Args) -> Result<()> {
    let mut stdout = io::stdout();
    print_banner(&mut stdout)?;

    let file_config = ConfigManager::load_default()?;
    let options = ResolveOptions {
        model: args.model,
        endpoint: args.endpoint,
    };
    let config = resolve_config(&options, &file_config);

    let mut prompter = TerminalPrompter::new();
    let Some(api_key) = acquire_api_key(&mut prompter)? else {
        print_interrupted(&mut stdout)?;
        return Ok(());
    };

    println!();
    println!("Initializing Gemini translator...");
    let client = GeminiClient::new(api_key, config.model, config.endpoint)?;
    println!(
        "{} Ready! Using {}",
        Style::success("✓"),
        Style::value(client.model())
    );

    let mut shell = Shell::new(
        Translator::new(client),
        prompter,
        stdout,
        config.default_output,
    );
    shell.run().await
}
