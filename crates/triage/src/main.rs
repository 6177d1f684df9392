// crates/triage/src/main.rs
// triage - AI-assisted bug and code analysis

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;
use triage::Analyzer;
use triage::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Load .env from current directory

    let cli = Cli::parse();

    let settings = Settings::load();

    // Logging goes to stderr; stdout carries the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let analyzer = || Analyzer::new(settings.build_client());

    match cli.command {
        Commands::Bug {
            title,
            description,
            stack_trace_file,
        } => cli::run_bug(&analyzer(), title, description, stack_trace_file).await?,
        Commands::Code { file, language } => cli::run_code(&analyzer(), file, language).await?,
        Commands::Suggest {
            context,
            language,
            requirements,
        } => cli::run_suggest(&analyzer(), context, language, requirements).await?,
        Commands::Config => cli::run_config(&settings)?,
    }

    Ok(())
}
