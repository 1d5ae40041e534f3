//! API server configuration.
//!
//! [`ApiConfig`] is populated by `main.rs` from CLI arguments and environment
//! variables, or from [`Default`] in tests and local development.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use summary_core::Workspace;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// All runtime configuration for the HTTP API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address and port the HTTP listener binds to.
    ///
    /// Defaults to loopback only; the API has no authentication.
    pub bind_addr: SocketAddr,

    /// Output directory and config file the API operates on.
    pub workspace: Workspace,
}

impl Default for ApiConfig {
    /// | Field       | Default                          |
    /// |-------------|----------------------------------|
    /// | bind_addr   | `127.0.0.1:5000`                 |
    /// | workspace   | `outputs/`, `config.json`        |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            workspace: Workspace::default(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
