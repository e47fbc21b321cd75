//! Fan-out of multi-valued source fields into child tables.
//!
//! Both expanders emit one row per (record, token) with the record's `Id` in
//! `Person_key` and the token in the name column. Other template columns are
//! left empty. Records that produce nothing are reported in
//! [`Expansion::skipped`] rather than failing the run.

use std::collections::HashSet;
use std::fmt;

use roster_model::{
    CERTIFICATION_NAME_COLUMN, CERTIFICATIONS_COLUMN, Cell, PERSON_KEY_COLUMN, Record,
    SOURCE_ID_COLUMN, SPECIALTY_COLUMNS, SPECIALTY_NAME_COLUMN, Table, Template,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

/// Whole-field values that mean "no certifications" (case-insensitive).
const EMPTY_CERTIFICATION_FIELDS: [&str; 3] = ["nan", "null", "none"];

/// Individual tokens dropped from a certification list (case-insensitive).
const PLACEHOLDER_CERTIFICATIONS: [&str; 5] = ["nan", "null", "none", "n/a", "na"];

/// Why a source record produced no child rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The `Id` cell is missing or blank.
    MissingIdentifier,
    /// The certification field is missing, blank, or a placeholder.
    NoCertifications,
    /// No specialty field holds a usable token.
    NoSpecialties,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            Self::MissingIdentifier => "missing identifier",
            Self::NoCertifications => "no certifications",
            Self::NoSpecialties => "no specialties",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One source record left out of an expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSkip {
    /// Zero-based row in the source table.
    pub row: usize,
    pub reason: SkipReason,
}

/// Result of expanding one multi-valued field.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub table: Table,
    pub skipped: Vec<RecordSkip>,
}

impl Expansion {
    /// Records left out because their identifier was blank.
    pub fn missing_identifiers(&self) -> usize {
        self.skipped
            .iter()
            .filter(|skip| skip.reason == SkipReason::MissingIdentifier)
            .count()
    }
}

/// One row per certification token of each record.
pub fn expand_certifications(source: &Table, template: &Template) -> Result<Expansion> {
    let mut builder = ChildRows::new(template, CERTIFICATION_NAME_COLUMN);
    for record in source.records() {
        let tokens = certification_tokens(record.get(CERTIFICATIONS_COLUMN));
        builder.push_record(record, tokens, SkipReason::NoCertifications);
    }
    builder.finish()
}

/// One row per distinct specialty of each record, across the three fields.
///
/// Deduplication is per record and case-insensitive; the first spelling wins.
pub fn expand_specialties(source: &Table, template: &Template) -> Result<Expansion> {
    let mut builder = ChildRows::new(template, SPECIALTY_NAME_COLUMN);
    for record in source.records() {
        let mut seen = HashSet::new();
        let tokens = SPECIALTY_COLUMNS
            .iter()
            .filter_map(|column| record.get(column))
            .flat_map(|cell| split_tokens(&cell.to_normalized_string()))
            .filter(|token| seen.insert(token.to_lowercase()))
            .collect();
        builder.push_record(record, tokens, SkipReason::NoSpecialties);
    }
    builder.finish()
}

fn certification_tokens(cell: Option<&Cell>) -> Vec<String> {
    let Some(cell) = cell.filter(|cell| !cell.is_missing()) else {
        return Vec::new();
    };
    let raw = cell.display_string();
    let trimmed = raw.trim();
    if trimmed.is_empty() || matches_any(trimmed, &EMPTY_CERTIFICATION_FIELDS) {
        return Vec::new();
    }
    split_tokens(&raw)
        .into_iter()
        .filter(|token| !matches_any(token, &PLACEHOLDER_CERTIFICATIONS))
        .collect()
}

fn split_tokens(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn matches_any(value: &str, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| value.eq_ignore_ascii_case(candidate))
}

/// Accumulates child rows shaped like a template.
struct ChildRows<'a> {
    template: &'a Template,
    key_position: Option<usize>,
    name_position: Option<usize>,
    rows: Vec<Vec<Cell>>,
    skipped: Vec<RecordSkip>,
}

impl<'a> ChildRows<'a> {
    fn new(template: &'a Template, name_column: &str) -> Self {
        let key_position = template.position(PERSON_KEY_COLUMN);
        let name_position = template.position(name_column);
        for (column, position) in [(PERSON_KEY_COLUMN, key_position), (name_column, name_position)]
        {
            if position.is_none() {
                warn!(column, "template has no such column; its values are dropped");
            }
        }
        Self {
            template,
            key_position,
            name_position,
            rows: Vec::new(),
            skipped: Vec::new(),
        }
    }

    fn push_record(&mut self, record: Record<'_>, tokens: Vec<String>, empty: SkipReason) {
        let identifier = record
            .get(SOURCE_ID_COLUMN)
            .map(Cell::to_normalized_string)
            .unwrap_or_default();
        let reason = if identifier.trim().is_empty() {
            Some(SkipReason::MissingIdentifier)
        } else if tokens.is_empty() {
            Some(empty)
        } else {
            None
        };
        if let Some(reason) = reason {
            debug!(row = record.index(), %reason, "record skipped");
            self.skipped.push(RecordSkip {
                row: record.index(),
                reason,
            });
            return;
        }

        for token in tokens {
            let mut row = vec![Cell::empty(); self.template.len()];
            if let Some(position) = self.key_position {
                row[position] = Cell::text(identifier.clone());
            }
            if let Some(position) = self.name_position {
                row[position] = Cell::text(token);
            }
            self.rows.push(row);
        }
    }

    fn finish(self) -> Result<Expansion> {
        let table = Table::from_rows(self.template.columns().to_vec(), self.rows)?;
        Ok(Expansion {
            table,
            skipped: self.skipped,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certification_field_placeholders() {
        assert!(certification_tokens(None).is_empty());
        assert!(certification_tokens(Some(&Cell::Missing)).is_empty());
        assert!(certification_tokens(Some(&Cell::text("  NULL "))).is_empty());
        assert!(certification_tokens(Some(&Cell::text("None"))).is_empty());
        assert_eq!(
            certification_tokens(Some(&Cell::text("CPR, N/A, na ,BLS,"))),
            vec!["CPR".to_string(), "BLS".to_string()]
        );
    }

    #[test]
    fn numeric_identifier_is_rendered_as_text() {
        let source = Table::from_rows(
            vec![SOURCE_ID_COLUMN.into(), CERTIFICATIONS_COLUMN.into()],
            vec![vec![Cell::Number(1001.0), Cell::text("CPR")]],
        )
        .unwrap();
        let template = Template::from_headers([PERSON_KEY_COLUMN, CERTIFICATION_NAME_COLUMN]).unwrap();
        let expansion = expand_certifications(&source, &template).unwrap();
        assert_eq!(
            expansion.table.rows(),
            &[vec![Cell::text("1001"), Cell::text("CPR")]]
        );
    }
}
