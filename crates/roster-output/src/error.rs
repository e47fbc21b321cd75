//! Error types for output generation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    /// I/O error while writing outputs.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A staged file could not be moved into the output directory.
    #[error("failed to move {staged} into place at {target}: {source}")]
    AtomicWriteFailed {
        staged: PathBuf,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
