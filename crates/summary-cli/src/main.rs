//! Summary Kit command-line entry point.
//!
//! # Usage
//!
//! ```text
//! summary-cli generate [--name NAME] [--topic TOPIC]
//! summary-cli list
//! summary-cli config [--name NAME] [--topic TOPIC]
//! ```
//!
//! With no subcommand the help text is printed.  Log lines go to
//! `--log-file` (default `cli.log`) so they never interleave with the
//! coloured terminal output.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use clap::{CommandFactory, Parser};
use summary_core::SummaryService;
use tracing_subscriber::EnvFilter;

use summary_cli::cli::Cli;
use summary_cli::commands;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file);

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    tracing::debug!("running {command:?}");
    let service = SummaryService::new(cli.workspace());
    let mut stdout = std::io::stdout().lock();
    commands::run(command, &service, &mut stdout)
}

/// Initialises `tracing` to append to `log_file`.
///
/// The level is controlled by `RUST_LOG` (default `info`).  If the log file
/// cannot be opened, logging falls back to stderr at `warn` so the command
/// itself still runs.
fn init_logging(log_file: &Path) {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("warn"))
                .with_writer(std::io::stderr)
                .init();
            tracing::warn!("cannot open log file {}: {e}", log_file.display());
        }
    }
}
