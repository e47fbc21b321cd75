//! Error types for mapping operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from mapping resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Override names a destination column the template does not have.
    #[error("destination column not in template: {0}")]
    DestinationNotFound(String),

    /// Override names a source column the export does not have.
    #[error("source column '{column}' chosen for '{destination}' not found in export")]
    SourceNotFound { destination: String, column: String },
}

/// Errors from loading the mapping configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
