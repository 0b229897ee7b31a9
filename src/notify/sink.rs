//! Append-only text file sink
//!
//! Each call opens the file, writes one line and closes it again; no handle
//! outlives a single write.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to deliver a line to a file sink
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open {path} for append: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to write to {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// A text file that only ever grows, one line per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    /// The path is stored as given: no validation, no directory creation.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` plus a line terminator
    pub fn append_line(&self, line: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", line).map_err(|source| SinkError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
