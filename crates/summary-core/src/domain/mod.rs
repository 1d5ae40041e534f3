//! Domain layer for summary-core.
//!
//! Pure types and functions with no dependencies on the file system, the
//! terminal, or the network.
//!
//! # What belongs in the domain layer?
//!
//! - The summary file naming scheme and content template
//! - The defaults document and the merge rules for request values
//!
//! # What does NOT belong here?
//!
//! - Reading or writing files (that is the `storage` layer)
//! - Reading the clock (callers pass the timestamp in)

pub mod defaults;
pub mod summary;

pub use defaults::Defaults;
pub use summary::{render_summary, sanitize_name, summary_file_name, GeneratedSummary, SummaryEntry};
