//! CLI command definitions

use clap::{Parser, ValueEnum};
use ragask_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Headline followed by info text
    Text,
    /// JSON object with `answer` and `info`
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for ragask
#[derive(Parser, Debug)]
#[command(name = "ragask")]
#[command(author, version, about = "Ask a remote answer service a question")]
#[command(long_about = r#"
ragask sends a question to an answer service (POST <url>/query) and prints
the answer and its supporting info.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. RAGASK_* env vars   e.g. RAGASK_SERVICE__BASE_URL=http://host:8000
3. ./ragask.toml       Project-level config
4. ~/.config/ragask/config.toml   Global config

Example:
  ragask "What does the onboarding doc say about VPN access?"
  ragask --url http://10.0.0.5:8000 -o json "Summarize the release notes"
  ragask --interactive
"#)]
pub struct Cli {
    /// The question to ask (not required in interactive mode)
    pub question: Option<String>,

    /// Start an interactive prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Base URL of the answer service (overrides config)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Request timeout in seconds, 0 to wait indefinitely (overrides config)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective config, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Check the service's health endpoint and exit
    #[arg(long)]
    pub health: bool,
}
