//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for chat outcomes
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted output with attempt metadata
    Full,
    /// Only the response text
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for candor
#[derive(Parser, Debug)]
#[command(name = "candor")]
#[command(author, version, about = "Honest chat responses through a writer/checker loop")]
#[command(long_about = r#"
Candor generates chat responses while actively suppressing sycophancy.

Each response goes through a quality-control loop:
1. A writer drafts a candidate under an anti-sycophancy policy
2. A checker judges the candidate for flattery, empty validation,
   and dodged disagreement
3. Rejected candidates are regenerated with the checker's feedback,
   up to a fixed attempt budget

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./candor.toml       Project-level config
3. ~/.config/candor/config.toml   Global config

Example:
  candor "Is my business plan good?"
  candor -m llama-3.3-70b --checker-model qwen-3-32b "Review my approach"
  candor --chat
"#)]
pub struct Cli {
    /// The message to respond to (not required in chat mode)
    pub message: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Writer model
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Checker model
    #[arg(long, value_name = "MODEL")]
    pub checker_model: Option<String>,

    /// JSON file with prior conversation turns to prepend
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Maximum writer/checker cycles
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
