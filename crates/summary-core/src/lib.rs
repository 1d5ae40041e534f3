//! # summary-core
//!
//! Shared library for Summary Kit containing the summary file format, the
//! JSON defaults document, and the file-system stores that read and write
//! them.
//!
//! This crate is used by both the CLI and the HTTP API.  It has zero
//! dependencies on terminal output, argument parsing, or network sockets.
//!
//! # Architecture overview
//!
//! - **`domain`** – Pure logic with no I/O: how a summary file is named, what
//!   its content looks like, and how request values are merged with stored
//!   defaults.
//!
//! - **`storage`** – Thin adapters over the file system: the JSON config
//!   store and the summary directory store.
//!
//! - **`application`** – [`SummaryService`], the single entry point both
//!   front ends call.  It loads config, merges defaults, and delegates to the
//!   stores.
//!
//! - **`clock`** – The [`Clock`] seam that supplies timestamps, so tests can
//!   pin the time a summary is created.

pub mod application;
pub mod clock;
pub mod domain;
pub mod storage;

// Re-export the most-used types at the crate root so callers can write
// `summary_core::SummaryService` instead of the full module path.
pub use application::service::{ServiceError, SummaryService, Workspace};
pub use clock::{Clock, SystemClock};
pub use domain::defaults::{Defaults, FALLBACK_NAME, FALLBACK_TOPIC};
pub use domain::summary::{GeneratedSummary, SummaryEntry};
pub use storage::config_store::ConfigError;
pub use storage::summary_store::SummaryError;
