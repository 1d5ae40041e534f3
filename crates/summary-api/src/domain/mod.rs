//! Domain layer for summary-api.
//!
//! # What belongs in the domain layer?
//!
//! - Request and response bodies (the JSON "language" of the API)
//! - Server configuration
//!
//! # What does NOT belong here?
//!
//! - Any `tokio` or `axum` types
//! - File I/O or environment variable reading

pub mod config;
pub mod messages;

pub use config::ApiConfig;
pub use messages::{
    ConfigResponse, ErrorResponse, GenerateResponse, HealthResponse, NameTopicRequest,
    SummaryListResponse,
};
