use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "naija")]
#[command(about = "Interactive English <-> Nigerian Pidgin translator powered by Google Gemini")]
#[command(version)]
pub struct Args {
    /// Gemini model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// OpenAI-compatible API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,
}
