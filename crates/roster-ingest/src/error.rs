//! Error types for roster ingestion.

use std::path::PathBuf;

use roster_model::ModelError;
use thiserror::Error;

/// Errors that make a source export or template unreadable.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Only UTF-8 input is supported.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// CSV file is empty or has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// The file could not be parsed as delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Template headers do not form a usable template.
    #[error("invalid template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: ModelError,
    },

    /// Source data does not form a rectangular table.
    #[error("invalid source table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub(crate) fn csv_parse(path: &std::path::Path, message: impl ToString) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
