//! Application layer for summary-core.
//!
//! Orchestrates the use cases both front ends expose: it loads the config,
//! merges request values with stored defaults, and delegates to the storage
//! layer.  Formatting results for a terminal or an HTTP response is left to
//! the front ends.

pub mod service;

pub use service::{ServiceError, SummaryService, Workspace};
