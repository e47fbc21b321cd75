//! Destination-to-source field mappings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a mapping entry got its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingOrigin {
    /// Exact match on normalized column names.
    Auto,
    /// Explicit operator choice (including a deliberate unmapping).
    Manual,
    /// Filled from the configured fallback table.
    Fallback,
    /// Nothing chosen yet.
    Unmapped,
}

impl MappingOrigin {
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
            Self::Fallback => "fallback",
            Self::Unmapped => "unmapped",
        }
    }
}

/// The source column chosen for one destination column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source: Option<String>,
    pub origin: MappingOrigin,
}

impl MappingEntry {
    pub fn unmapped() -> Self {
        Self {
            source: None,
            origin: MappingOrigin::Unmapped,
        }
    }

    pub fn auto(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            origin: MappingOrigin::Auto,
        }
    }

    pub fn fallback(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            origin: MappingOrigin::Fallback,
        }
    }

    /// A manual choice; `None` records a deliberate unmapping.
    pub fn manual(source: Option<String>) -> Self {
        Self {
            source,
            origin: MappingOrigin::Manual,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_mapped(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_manual(&self) -> bool {
        self.origin == MappingOrigin::Manual
    }
}

/// Destination column → [`MappingEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    entries: BTreeMap<String, MappingEntry>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, destination: &str) -> Option<&MappingEntry> {
        self.entries.get(destination)
    }

    /// The mapped source column for a destination, if any.
    pub fn source_for(&self, destination: &str) -> Option<&str> {
        self.entries.get(destination).and_then(MappingEntry::source)
    }

    pub fn insert(&mut self, destination: impl Into<String>, entry: MappingEntry) {
        self.entries.insert(destination.into(), entry);
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.entries.contains_key(destination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_mapped()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, MappingEntry)> for FieldMapping {
    fn from_iter<T: IntoIterator<Item = (String, MappingEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
