use clap::Parser;
use std::process::ExitCode;

use naija_voice::cli::{Args, app};
use naija_voice::logging;
use naija_voice::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match app::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}
