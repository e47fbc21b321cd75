//! Mapping state for one processing run.

use std::collections::BTreeMap;

use roster_model::{FieldMapping, MappingOrigin, Template, TemplateKind};
use tracing::info;

use crate::error::MappingError;
use crate::resolve::{ManualOverrides, apply_fallback, resolve};

/// The three field mappings of a run, resolved against one source export.
///
/// Created at run start, mutated only through [`MappingSession::resolve`],
/// and dropped (or [`reset`](MappingSession::reset)) when the run ends.
#[derive(Debug, Clone, Default)]
pub struct MappingSession {
    source_columns: Vec<String>,
    fallback: BTreeMap<String, String>,
    mappings: BTreeMap<TemplateKind, FieldMapping>,
}

impl MappingSession {
    pub fn new(source_columns: Vec<String>) -> Self {
        Self {
            source_columns,
            ..Self::default()
        }
    }

    /// Sets the fallback hints used for the general-info template.
    #[must_use]
    pub fn with_fallback(mut self, fallback: BTreeMap<String, String>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn source_columns(&self) -> &[String] {
        &self.source_columns
    }

    /// Resolves one template, building on the mapping from earlier calls.
    pub fn resolve(
        &mut self,
        kind: TemplateKind,
        template: &Template,
        auto_match: bool,
        overrides: &ManualOverrides,
    ) -> Result<&FieldMapping, MappingError> {
        let existing = self.mappings.remove(&kind).unwrap_or_default();
        let mut mapping = match resolve(
            template.columns(),
            &self.source_columns,
            &existing,
            auto_match,
            overrides,
        ) {
            Ok(mapping) => mapping,
            Err(error) => {
                self.mappings.insert(kind, existing);
                return Err(error);
            }
        };
        if kind == TemplateKind::General && !self.fallback.is_empty() {
            apply_fallback(&mut mapping, &self.source_columns, &self.fallback);
        }

        let summary = MappingSummary::of(&mapping, template);
        info!(
            template = %kind,
            total = summary.total,
            mapped = summary.mapped(),
            auto = summary.auto,
            manual = summary.manual,
            fallback = summary.fallback,
            "resolved field mapping"
        );
        Ok(self.mappings.entry(kind).or_insert(mapping))
    }

    pub fn mapping(&self, kind: TemplateKind) -> Option<&FieldMapping> {
        self.mappings.get(&kind)
    }

    /// Forgets every resolved mapping.
    pub fn reset(&mut self) {
        self.mappings.clear();
    }
}

/// Summary of mapping counts for one template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingSummary {
    /// Number of destination columns.
    pub total: usize,
    pub auto: usize,
    pub manual: usize,
    pub fallback: usize,
}

impl MappingSummary {
    pub fn of(mapping: &FieldMapping, template: &Template) -> Self {
        let mut summary = Self {
            total: template.len(),
            ..Self::default()
        };
        for column in template.columns() {
            let Some(entry) = mapping.get(column) else {
                continue;
            };
            if !entry.is_mapped() {
                continue;
            }
            match entry.origin {
                MappingOrigin::Auto => summary.auto += 1,
                MappingOrigin::Manual => summary.manual += 1,
                MappingOrigin::Fallback => summary.fallback += 1,
                MappingOrigin::Unmapped => {}
            }
        }
        summary
    }

    pub fn mapped(&self) -> usize {
        self.auto + self.manual + self.fallback
    }

    pub fn unmapped(&self) -> usize {
        self.total - self.mapped()
    }
}
