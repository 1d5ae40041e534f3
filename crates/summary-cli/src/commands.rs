//! Command runners: call the service and print the result.
//!
//! Every runner writes to a caller-supplied `Write` so tests can capture the
//! exact terminal output.  Colours come from `colored`, which honours
//! `NO_COLOR` and drops escape codes when stdout is not a terminal.

use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use summary_core::storage::config_store::to_pretty_json;
use summary_core::{ServiceError, SummaryService};
use tracing::info;

use crate::cli::{Command, NameTopicArgs};

/// Runs one parsed subcommand against `service`, printing to `out`.
///
/// # Errors
///
/// Propagates file-system and JSON failures from the service, and failures
/// writing to `out`.
pub fn run(command: &Command, service: &SummaryService, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        Command::Generate(args) => generate(args, service, out),
        Command::List => list(service, out),
        Command::Config(args) => configure(args, service, out),
    }
}

fn generate(args: &NameTopicArgs, service: &SummaryService, out: &mut dyn Write) -> anyhow::Result<()> {
    let summary = service
        .generate(args.name.as_deref(), args.topic.as_deref())
        .context("failed to generate summary")?;

    writeln!(out, "{}", "✔ Summary created:".green())?;
    writeln!(out, "{}", format!("   {}", summary.path.display()).cyan())?;
    Ok(())
}

fn list(service: &SummaryService, out: &mut dyn Write) -> anyhow::Result<()> {
    let entries = service.list().context("failed to list summaries")?;

    if entries.is_empty() {
        writeln!(out, "{}", "No summaries found.".yellow())?;
        return Ok(());
    }

    writeln!(out, "{}", "📄 Existing Summary Files:".blue())?;
    for entry in &entries {
        writeln!(out, " - {}", entry.name)?;
    }
    Ok(())
}

fn configure(args: &NameTopicArgs, service: &SummaryService, out: &mut dyn Write) -> anyhow::Result<()> {
    let defaults = match service.configure_defaults(args.name.as_deref(), args.topic.as_deref()) {
        Ok(defaults) => defaults,
        Err(ServiceError::NothingToConfigure) => {
            writeln!(
                out,
                "{}",
                "Nothing to configure. Use --name and/or --topic.".yellow()
            )?;
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to save configuration"),
    };

    info!("configuration updated from the command line");
    writeln!(out, "{}", "✔ Configuration saved!".green())?;
    writeln!(out, "{}", to_pretty_json(&defaults)?)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
