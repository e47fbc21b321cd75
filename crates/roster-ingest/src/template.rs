//! Destination template loading.

use std::path::Path;

use roster_model::Template;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::file::{check_file_size, validate_encoding};

/// Reads the header row of a template CSV.
///
/// Required-field markers are stripped from the headers; data rows, if any,
/// are ignored.
pub fn read_template(path: &Path) -> Result<Template> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv_parse(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv_parse(path, e))?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let template = Template::from_headers(&headers).map_err(|source| IngestError::Template {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), columns = template.len(), "loaded template");
    Ok(template)
}
