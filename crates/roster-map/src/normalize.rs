//! Column-name canonicalization for auto-matching.

use std::collections::BTreeMap;

use roster_model::REQUIRED_MARKER;

/// Canonical form of a column name: trimmed, lowercased, required markers
/// removed, non-breaking spaces turned into spaces and whitespace collapsed.
///
/// Only used to compare names; mappings keep the original spelling.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(REQUIRED_MARKER, "")
        .replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Source columns grouped by normalized name.
#[derive(Debug, Clone, Default)]
pub struct NormalizedLookup {
    by_name: BTreeMap<String, Vec<String>>,
}

impl NormalizedLookup {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for column in columns {
            let column = column.as_ref();
            by_name
                .entry(normalize_column_name(column))
                .or_default()
                .push(column.to_string());
        }
        Self { by_name }
    }

    /// All source columns whose normalized name equals that of `name`.
    pub fn candidates(&self, name: &str) -> &[String] {
        self.by_name
            .get(&normalize_column_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The single matching source column, or `None` if zero or several match.
    pub fn unique_match(&self, name: &str) -> Option<&str> {
        match self.candidates(name) {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}
