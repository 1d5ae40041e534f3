//! Infrastructure layer for summary-api.
//!
//! # Responsibilities
//!
//! - Binding the TCP listener
//! - Routing HTTP requests to the application use cases
//! - Running file-system work on Tokio's blocking pool
//! - Mapping [`ApiError`](crate::application::ApiError) to status codes
//! - Stopping cleanly when the shutdown future resolves
//!
//! # What does NOT belong here?
//!
//! - Default resolution or config merging (that is `summary-core`)
//! - Response body definitions (that is the domain layer)

pub mod http_server;

pub use http_server::{build_router, run_server};
