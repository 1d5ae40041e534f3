//! File-system store for summary files.
//!
//! All summaries live directly inside one output directory.  The directory is
//! created lazily on the first write; listing a directory that does not exist
//! yet yields an empty list rather than an error.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::domain::summary::{render_summary, summary_file_name, SummaryEntry};

/// Error type for summary file operations.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing summaries at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Writes and enumerates summary files in a single directory.
#[derive(Clone)]
pub struct SummaryStore {
    output_dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl SummaryStore {
    pub fn new(output_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            output_dir: output_dir.into(),
            clock,
        }
    }

    /// Writes a new summary file for `name` / `topic` and returns its path.
    ///
    /// The clock is read once; the same instant appears in the file name and
    /// on the `Created:` line.  A summary for the same name created within the
    /// same second replaces the earlier file.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if the output directory cannot be created
    /// or the file cannot be written.
    pub fn generate(&self, name: &str, topic: &str) -> Result<PathBuf, SummaryError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| SummaryError::io(&self.output_dir, e))?;

        let now = self.clock.now();
        let path = self.output_dir.join(summary_file_name(name, now));
        std::fs::write(&path, render_summary(name, topic, now))
            .map_err(|e| SummaryError::io(&path, e))?;

        info!("Generated summary file: {}", path.display());
        Ok(path)
    }

    /// Lists every regular file in the output directory, sorted by file name.
    ///
    /// Returned paths are absolute.  Sub-directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Io`] if the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<SummaryEntry>, SummaryError> {
        let read_dir = match std::fs::read_dir(&self.output_dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("output dir {} does not exist yet", self.output_dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(SummaryError::io(&self.output_dir, e)),
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| SummaryError::io(&self.output_dir, e))?;
            let path = entry.path();
            // `Path::is_file` follows symlinks, so a link to a file is listed.
            if !path.is_file() {
                continue;
            }
            entries.push(SummaryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: absolute(&path),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        debug!("listed {} summaries in {}", entries.len(), self.output_dir.display());
        Ok(entries)
    }
}

/// Resolves `path` to an absolute, symlink-free path where possible.
///
/// Falls back to joining the current directory when canonicalization fails
/// (for example when the file vanished between listing and resolving).
pub fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
