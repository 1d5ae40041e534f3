//! Application layer for summary-api.
//!
//! Turns parsed requests into `SummaryService` calls and shapes the results
//! into response bodies.  Mapping an [`ApiError`] onto an HTTP status code is
//! left to the infrastructure layer.

pub mod api_service;

pub use api_service::{configure, generate, health, list_summaries, ApiError};
