use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a path into a parsed JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Cannot open file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON format in file: {} ({source})", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot proceed due to invalid input files.")]
    InputsUnavailable,
}
