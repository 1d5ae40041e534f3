//! Storage infrastructure: the JSON config file and the summary directory.
//!
//! This module is a thin adapter between the application and the file
//! system:
//!
//! - `config_store` reads and writes the defaults document, returning empty
//!   defaults when the file does not exist yet (first run).
//! - `summary_store` writes new summary files and enumerates existing ones.

pub mod config_store;
pub mod summary_store;

pub use config_store::{ConfigError, ConfigStore};
pub use summary_store::{SummaryError, SummaryStore};
