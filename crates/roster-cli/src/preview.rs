//! Paginated, optionally filtered view of a table.

use anyhow::{Result, bail};
use roster_model::{Cell, Table};
use roster_transform::stringify;

/// What part of a table to show.
#[derive(Debug, Clone, Default)]
pub struct PreviewQuery {
    /// First row to show, counted after filtering.
    pub start: usize,
    /// Maximum number of rows to show.
    pub rows: usize,
    /// Column name and case-insensitive search term.
    pub filter: Option<(String, String)>,
}

/// One page of a stringified table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Rows in the table before filtering.
    pub total_rows: usize,
    /// Rows that passed the filter.
    pub matched_rows: usize,
    pub start: usize,
}

/// Stringifies `table`, applies the filter and cuts out one page.
pub fn preview_page(table: Table, query: &PreviewQuery) -> Result<PreviewPage> {
    let table = stringify(table);
    let total_rows = table.height();

    let filter = match &query.filter {
        Some((column, term)) => {
            let Some(index) = table.column_index(column) else {
                bail!("column '{column}' not found");
            };
            Some((index, term.to_lowercase()))
        }
        None => None,
    };

    let columns = table.columns().to_vec();
    let matched: Vec<Vec<String>> = table
        .into_rows()
        .into_iter()
        .filter(|row| {
            filter.as_ref().is_none_or(|(index, term)| {
                row[*index].display_string().to_lowercase().contains(term)
            })
        })
        .map(|row| row.iter().map(Cell::display_string).collect())
        .collect();
    let matched_rows = matched.len();
    let rows = matched
        .into_iter()
        .skip(query.start)
        .take(query.rows)
        .collect();

    Ok(PreviewPage {
        columns,
        rows,
        total_rows,
        matched_rows,
        start: query.start,
    })
}
