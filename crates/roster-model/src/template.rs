//! Destination templates.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Marker the target system puts on required template headers (e.g. `Fname*`).
pub const REQUIRED_MARKER: char = '*';

/// Strips the required-field marker and surrounding whitespace from a header.
pub fn clean_template_column(raw: &str) -> String {
    raw.replace(REQUIRED_MARKER, "").trim().to_string()
}

/// Ordered column list one output table must have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    columns: Vec<String>,
}

impl Template {
    /// Builds a template from already-clean column names.
    ///
    /// The list must be non-empty, without blank names and without duplicates.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        if columns.is_empty() {
            return Err(ModelError::EmptyTemplate);
        }
        let mut seen = HashSet::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(ModelError::EmptyColumnName { position });
            }
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn(column.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Builds a template from raw header cells, stripping required markers.
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns = headers
            .into_iter()
            .map(|header| clean_template_column(header.as_ref()))
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
