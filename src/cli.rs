use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "career-compass", version)]
#[command(about = "AI career guidance wizard for students finishing +2", long_about = None)]
pub struct Args {
    /// Gemini model to use
    #[arg(long)]
    pub model: Option<String>,

    /// API key override; falls back to GEMINI_API_KEY and the config file
    #[arg(long)]
    pub api_key: Option<String>,

    /// Collect the profile and print it as JSON instead of calling the API
    #[arg(long)]
    pub dry_run: bool,
}
