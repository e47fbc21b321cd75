use thiserror::Error;

/// Structural errors raised while building tables and templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("template has no columns")]
    EmptyTemplate,

    #[error("column {position} has an empty name")]
    EmptyColumnName { position: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
