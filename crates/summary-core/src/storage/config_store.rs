//! JSON-based persistence for the [`Defaults`] document.
//!
//! The file is written with four-space indentation so it stays pleasant to
//! edit by hand:
//!
//! ```json
//! {
//!     "default_name": "Ada Lovelace",
//!     "default_topic": "Engines"
//! }
//! ```

use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::defaults::Defaults;

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid defaults document.
    #[error("failed to parse config JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads and writes the defaults document at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the defaults, returning `Defaults::default()` if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than "not
    /// found", and [`ConfigError::Parse`] if the JSON is malformed.
    pub fn load(&self) -> Result<Defaults, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let defaults =
                    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                        path: self.path.clone(),
                        source,
                    })?;
                debug!("loaded config from {}", self.path.display());
                Ok(defaults)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}; using empty defaults", self.path.display());
                Ok(Defaults::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persists `defaults` and returns them.
    ///
    /// Creates the parent directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system failures or
    /// [`ConfigError::Serialize`] if serialization fails.
    pub fn save(&self, defaults: Defaults) -> Result<Defaults, ConfigError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = to_pretty_json(&defaults).map_err(ConfigError::Serialize)?;
        std::fs::write(&self.path, content).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("saved config to {}", self.path.display());
        Ok(defaults)
    }
}

/// Serializes `value` as JSON indented by four spaces.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
