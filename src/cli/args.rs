//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// report-summary - Summarize a CSV report with an LLM
#[derive(Parser, Debug)]
#[command(name = "report-summary")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Path to the CSV report (use ./config or ./completions for files named like a subcommand)
    #[arg(required = true)]
    pub csv_path: Option<PathBuf>,

    /// OpenAI API key. Defaults to the OPENAI_API_KEY env var
    #[arg(long)]
    pub api_key: Option<String>,

    /// Maximum rows to include in the prompt (defaults to report.max_rows, 10)
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Print the prompt instead of sending it
    #[arg(long)]
    pub print_prompt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
