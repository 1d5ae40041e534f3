//! summary-cli library entry point.
//!
//! Re-exports the argument definitions and command runners so that
//! integration tests in `tests/` and the binary in `main.rs` share the same
//! module tree.
//!
//! ```text
//! main.rs
//!  ├─ cli::Cli::parse()        -- clap: subcommand + global paths
//!  ├─ logging → --log-file     -- keeps the terminal free of log lines
//!  └─ commands::run()          -- calls SummaryService, prints coloured output
//! ```

pub mod cli;
pub mod commands;
