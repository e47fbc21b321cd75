//! Row/column tables.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ModelError, Result};

/// An ordered table where every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ModelError::DuplicateColumn(column.clone()));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Creates a table and validates the width of every row.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self> {
        let mut table = Self::new(columns)?;
        table.rows.reserve(rows.len());
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RaggedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cells of one column in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    /// Applies `f` to every cell of a column. Returns false if the column is absent.
    pub fn update_column<F>(&mut self, name: &str, mut f: F) -> bool
    where
        F: FnMut(&mut Cell),
    {
        let Some(index) = self.column_index(name) else {
            return false;
        };
        for row in &mut self.rows {
            f(&mut row[index]);
        }
        true
    }

    /// Rebuilds every cell with `f`, keeping columns and row order.
    pub fn map_cells<F>(self, mut f: F) -> Self
    where
        F: FnMut(Cell) -> Cell,
    {
        let rows = self
            .rows
            .into_iter()
            .map(|row| row.into_iter().map(&mut f).collect())
            .collect();
        Self {
            columns: self.columns,
            rows,
        }
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        (0..self.rows.len()).map(move |index| Record { table: self, index })
    }
}

/// Borrowed view of one row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    index: usize,
}

impl<'a> Record<'a> {
    /// Zero-based row position in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        let position = self.table.column_index(column)?;
        self.table.rows[self.index].get(position)
    }

    pub fn cells(&self) -> &'a [Cell] {
        &self.table.rows[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = Table::new(cols(&["Id", "Id"])).unwrap_err();
        assert_eq!(err, ModelError::DuplicateColumn("Id".to_string()));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Table::from_rows(cols(&["A", "B"]), vec![vec![Cell::text("1")]]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::RaggedRow {
                row: 0,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn record_lookup_by_name() {
        let table = Table::from_rows(
            cols(&["Id", "Name"]),
            vec![
                vec![Cell::Number(1.0), Cell::text("Ada")],
                vec![Cell::Number(2.0), Cell::Missing],
            ],
        )
        .unwrap();
        let records: Vec<_> = table.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Name"), Some(&Cell::text("Ada")));
        assert_eq!(records[1].get("Name"), Some(&Cell::Missing));
        assert_eq!(records[1].get("Other"), None);
        assert_eq!(records[1].index(), 1);
    }

    #[test]
    fn update_column_touches_only_that_column() {
        let mut table = Table::from_rows(
            cols(&["A", "B"]),
            vec![vec![Cell::text("a"), Cell::text("b")]],
        )
        .unwrap();
        assert!(table.update_column("B", |cell| *cell = Cell::text("x")));
        assert!(!table.update_column("C", |_| {}));
        assert_eq!(table.rows()[0], vec![Cell::text("a"), Cell::text("x")]);
    }
}
