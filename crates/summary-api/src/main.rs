//! Summary Kit HTTP API entry point.
//!
//! # Usage
//!
//! ```text
//! summary-api [OPTIONS]
//!
//! Options:
//!   --bind        <IP>    Listen address          [default: 127.0.0.1]
//!   --port        <PORT>  Listen port             [default: 5000]
//!   --output-dir  <DIR>   Summary directory       [default: outputs]
//!   --config-file <FILE>  Defaults document       [default: config.json]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable              | Default       |
//! |-----------------------|---------------|
//! | `SUMMARY_API_BIND`    | `127.0.0.1`   |
//! | `SUMMARY_API_PORT`    | `5000`        |
//! | `SUMMARY_OUTPUT_DIR`  | `outputs`     |
//! | `SUMMARY_CONFIG_FILE` | `config.json` |
//!
//! CLI args take precedence when both are present.  Log verbosity follows
//! `RUST_LOG` (default `info`).

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use summary_core::application::service::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR};
use summary_core::Workspace;
use tracing::info;
use tracing_subscriber::EnvFilter;

use summary_api::domain::config::DEFAULT_PORT;
use summary_api::domain::ApiConfig;
use summary_api::infrastructure::run_server;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Summary Kit HTTP API.
#[derive(Debug, Parser)]
#[command(name = "summary-api", about = "JSON HTTP API for generating and listing summaries", version)]
struct Cli {
    /// IP address to bind the HTTP listener to.
    #[arg(long, default_value = "127.0.0.1", env = "SUMMARY_API_BIND")]
    bind: String,

    /// TCP port to listen on.
    #[arg(long, default_value_t = DEFAULT_PORT, env = "SUMMARY_API_PORT")]
    port: u16,

    /// Directory summary files are written to and listed from.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "SUMMARY_OUTPUT_DIR")]
    output_dir: PathBuf,

    /// JSON file holding the default name and topic.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, env = "SUMMARY_CONFIG_FILE")]
    config_file: PathBuf,
}

impl Cli {
    /// Converts the parsed arguments into an [`ApiConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if `--bind` is not a valid IP address.
    fn into_api_config(self) -> anyhow::Result<ApiConfig> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: '{}'", self.bind))?;

        Ok(ApiConfig {
            bind_addr: SocketAddr::new(ip, self.port),
            workspace: Workspace {
                output_dir: self.output_dir,
                config_file: self.config_file,
            },
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Cli::parse().into_api_config()?;

    info!(
        "summary API starting: bind={}, output_dir={}, config_file={}",
        config.bind_addr,
        config.workspace.output_dir.display(),
        config.workspace.config_file.display()
    );

    run_server(config, shutdown_signal()).await?;

    info!("summary API stopped");
    Ok(())
}

/// Resolves on Ctrl+C (SIGINT on Unix).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C; initiating graceful shutdown"),
        Err(e) => {
            tracing::error!("failed to listen for Ctrl+C signal: {e}");
            // Without a signal handler, keep serving until the process is killed.
            std::future::pending::<()>().await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
