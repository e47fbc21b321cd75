//! Source export loading.

use std::path::Path;

use polars::prelude::*;
use roster_model::{Cell, Table};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::file::{check_file_size, validate_encoding};
use crate::text::clean_text;

/// Options for reading a roster export.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceOptions {
    /// Let Polars infer numeric columns. Off by default so identifiers and
    /// phone numbers keep leading zeros.
    pub infer_types: bool,
    /// Run [`clean_text`] over every text cell.
    pub clean_text: bool,
}

impl SourceOptions {
    #[must_use]
    pub fn with_infer_types(mut self, enable: bool) -> Self {
        self.infer_types = enable;
        self
    }

    #[must_use]
    pub fn with_clean_text(mut self, enable: bool) -> Self {
        self.clean_text = enable;
        self
    }
}

/// Reads a roster export into a [`Table`].
///
/// Empty fields become [`Cell::Missing`]. With `infer_types`, numeric columns
/// become [`Cell::Number`]; otherwise every value is [`Cell::Text`].
pub fn read_source_table(path: &Path, options: &SourceOptions) -> Result<Table> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let infer_length = if options.infer_types { Some(100) } else { Some(0) };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(infer_length)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::csv_parse(path, e))?
        .finish()
        .map_err(|e| IngestError::csv_parse(path, e))?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if df.width() > 500 {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "source has more than 500 columns"
        );
    }

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().trim_start_matches('\u{feff}').to_string())
        .collect();

    let height = df.height();
    let mut rows: Vec<Vec<Cell>> = (0..height)
        .map(|_| Vec::with_capacity(columns.len()))
        .collect();
    for column in df.get_columns() {
        for (index, row) in rows.iter_mut().enumerate() {
            let value = column
                .get(index)
                .map_err(|e| IngestError::csv_parse(path, e))?;
            let cell = any_to_cell(value);
            row.push(match cell {
                Cell::Text(text) if options.clean_text => Cell::Text(clean_text(&text)),
                other => other,
            });
        }
    }

    let table = Table::from_rows(columns, rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rows = table.height(),
        columns = table.width(),
        "loaded source table"
    );
    Ok(table)
}

fn any_to_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => Cell::Missing,
        AnyValue::String(s) => Cell::Text(s.to_string()),
        AnyValue::StringOwned(s) => Cell::Text(s.to_string()),
        AnyValue::Int32(v) => Cell::Number(f64::from(v)),
        AnyValue::Int64(v) => Cell::Number(v as f64),
        AnyValue::UInt32(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt64(v) => Cell::Number(v as f64),
        AnyValue::Float32(v) => Cell::Number(f64::from(v)),
        AnyValue::Float64(v) => Cell::Number(v),
        AnyValue::Boolean(b) => Cell::text(if b { "True" } else { "False" }),
        other => Cell::Text(other.to_string()),
    }
}
