// crates/triage/src/cli/mod.rs
// CLI module for triage commands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;

pub use analyze::{run_bug, run_code, run_config, run_suggest};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "AI-assisted bug and code analysis")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a bug report and propose causes and fixes
    Bug {
        /// Bug title
        #[arg(short, long)]
        title: String,

        /// Bug description
        #[arg(short, long, default_value = "")]
        description: String,

        /// File containing a stack trace (use "-" for stdin)
        #[arg(short, long)]
        stack_trace_file: Option<PathBuf>,
    },

    /// Review a source file
    Code {
        /// File to analyze
        #[arg(short, long)]
        file: PathBuf,

        /// Language (inferred from the file extension when omitted)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Generate code improvement suggestions
    Suggest {
        /// What the code does today
        #[arg(short, long)]
        context: String,

        /// Target language
        #[arg(short, long)]
        language: String,

        /// What the improvement should achieve
        #[arg(short, long)]
        requirements: String,
    },

    /// Show resolved configuration and validation report
    Config,
}
