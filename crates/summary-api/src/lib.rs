//! summary-api library crate.
//!
//! This crate exposes the Summary Kit use cases over a small JSON HTTP API.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! HTTP client (JSON)
//!         ↕
//! [summary-api]
//!   ├── domain/           Pure types: request/response bodies, ApiConfig
//!   ├── application/      Use cases: call SummaryService, shape responses
//!   └── infrastructure/
//!         └── http_server/ axum router, handlers, listener, shutdown
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no framework types.
//! - `application` depends on `domain` and `summary-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: request/response types and server configuration.
pub mod domain;

/// Application layer: the four API use cases.
pub mod application;

/// Infrastructure layer: the axum HTTP server.
pub mod infrastructure;
