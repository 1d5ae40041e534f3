//! Command-line argument definitions.
//!
//! ```text
//! summary-cli [--output-dir DIR] [--config-file FILE] [--log-file FILE] <COMMAND>
//!
//! Commands:
//!   generate  Generate a new summary file.
//!   list      List all summary files.
//!   config    Save default settings.
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Default       | Description                 |
//! |-----------------------|---------------|-----------------------------|
//! | `SUMMARY_OUTPUT_DIR`  | `outputs`     | Directory for summary files |
//! | `SUMMARY_CONFIG_FILE` | `config.json` | Defaults document           |
//! | `SUMMARY_LOG_FILE`    | `cli.log`     | Log destination             |
//!
//! CLI args take precedence when both are present.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use summary_core::application::service::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
use summary_core::Workspace;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "cli.log";

/// Multi-command CLI for creating and listing summary files.
#[derive(Debug, Parser)]
#[command(name = "summary-cli", version)]
pub struct Cli {
    /// Directory summary files are written to and listed from.
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_DIR, env = "SUMMARY_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// JSON file holding the default name and topic.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE, env = "SUMMARY_CONFIG_FILE")]
    pub config_file: PathBuf,

    /// File that log lines are appended to.
    #[arg(long, global = true, default_value = DEFAULT_LOG_FILE, env = "SUMMARY_LOG_FILE")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a new summary file.
    Generate(NameTopicArgs),
    /// List all summary files.
    List,
    /// Save default settings.
    Config(NameTopicArgs),
}

/// `--name` / `--topic` pair shared by `generate` and `config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct NameTopicArgs {
    /// Name or label (e.g., 'Example User').
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Topic (e.g., 'Testing the CLI').
    #[arg(long, short = 't')]
    pub topic: Option<String>,
}

impl Cli {
    /// The output directory / config file pair selected by the flags.
    pub fn workspace(&self) -> Workspace {
        Workspace {
            output_dir: self.output_dir.clone(),
            config_file: self.config_file.clone(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
