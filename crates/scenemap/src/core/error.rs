//! Core error types for project scanning
//!
//! Only setup failures and output failures are surfaced as errors. Per-file
//! problems during a scan are logged and counted instead.

use std::path::PathBuf;

use thiserror::Error;

/// Core error types for project scanning
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not inside a Godot project: could not find {marker} above {}", start.display())]
    ProjectNotFound { start: PathBuf, marker: String },

    #[error("Cannot create output file {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create a new project-not-found error
    pub fn project_not_found(start: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self::ProjectNotFound {
            start: start.into(),
            marker: marker.into(),
        }
    }

    /// Create a new output-creation error
    pub fn output_create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputCreate {
            path: path.into(),
            source,
        }
    }

    /// Create a new write error
    pub fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}
