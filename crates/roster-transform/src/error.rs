//! Error types for transformation.

use roster_model::{ModelError, TemplateKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A run was started without a template it needs.
    #[error("no template loaded for {0}")]
    MissingTemplate(TemplateKind),

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
