//! SummaryService: the use cases shared by the CLI and the HTTP API.
//!
//! | Use case              | Reads config | Writes config | Touches output dir |
//! |-----------------------|--------------|---------------|--------------------|
//! | `generate`            | yes          | no            | write              |
//! | `list`                | no           | no            | read               |
//! | `configure_defaults`  | yes          | yes           | no                 |

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::domain::defaults::{is_nothing_to_configure, Defaults};
use crate::domain::summary::{GeneratedSummary, SummaryEntry};
use crate::storage::config_store::{ConfigError, ConfigStore};
use crate::storage::summary_store::{absolute, SummaryError, SummaryStore};

/// Default directory summaries are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Default config file path, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Error type for the summary use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// `configure_defaults` was called without a name or a topic.
    #[error("nothing to configure: provide a name and/or a topic")]
    NothingToConfigure,
}

/// The pair of paths a service instance operates on.
///
/// # Example
///
/// ```rust
/// use summary_core::Workspace;
///
/// let ws = Workspace::default();
/// assert_eq!(ws.output_dir.to_str(), Some("outputs"));
/// assert_eq!(ws.config_file.to_str(), Some("config.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Directory that holds summary files.
    pub output_dir: PathBuf,
    /// JSON file that holds the defaults document.
    pub config_file: PathBuf,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

/// Entry point for every summary operation.
///
/// Construct one per process and share it (it is cheap to clone).
#[derive(Clone)]
pub struct SummaryService {
    config: ConfigStore,
    summaries: SummaryStore,
}

impl SummaryService {
    /// Creates a service that reads the system clock.
    pub fn new(workspace: Workspace) -> Self {
        Self::with_clock(workspace, Arc::new(SystemClock))
    }

    /// Creates a service with an injected clock.
    pub fn with_clock(workspace: Workspace, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: ConfigStore::new(workspace.config_file),
            summaries: SummaryStore::new(workspace.output_dir, clock),
        }
    }

    /// Loads the stored defaults (empty when no config file exists).
    pub fn load_config(&self) -> Result<Defaults, ServiceError> {
        Ok(self.config.load()?)
    }

    /// Writes `defaults` to the config file and returns them.
    pub fn save_config(&self, defaults: Defaults) -> Result<Defaults, ServiceError> {
        Ok(self.config.save(defaults)?)
    }

    /// Generates a summary, filling missing values from the stored defaults.
    ///
    /// # Errors
    ///
    /// Fails if the config file is unreadable or malformed, or if the summary
    /// file cannot be written.
    pub fn generate(
        &self,
        name: Option<&str>,
        topic: Option<&str>,
    ) -> Result<GeneratedSummary, ServiceError> {
        let defaults = self.config.load()?;
        let name = defaults.resolve_name(name);
        let topic = defaults.resolve_topic(topic);

        let path = self.summaries.generate(&name, &topic)?;

        Ok(GeneratedSummary {
            name,
            topic,
            path: absolute(&path),
        })
    }

    /// Lists existing summary files sorted by file name.
    pub fn list(&self) -> Result<Vec<SummaryEntry>, ServiceError> {
        Ok(self.summaries.list()?)
    }

    /// Merges `name` / `topic` into the stored defaults and persists them.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NothingToConfigure`] (without touching the
    /// file) when neither value is supplied or both are empty.
    pub fn configure_defaults(
        &self,
        name: Option<&str>,
        topic: Option<&str>,
    ) -> Result<Defaults, ServiceError> {
        if is_nothing_to_configure(name, topic) {
            return Err(ServiceError::NothingToConfigure);
        }

        let mut defaults = self.config.load()?;
        defaults.apply(name, topic);
        Ok(self.config.save(defaults)?)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
