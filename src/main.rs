use clap::Parser;

mod cli;
mod config;
mod domain;
mod gemini;
mod models;
mod profile;
mod prompts;
mod render;
mod schema;
mod screens;
mod service;
mod session;

use cli::Args;
use config::Config;
use gemini::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args)?;
    let client = GeminiClient::new(config.api_key, config.model);

    screens::run(&client, args.dry_run).await
}
