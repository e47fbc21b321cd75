//! One all-or-nothing conversion run.
//!
//! A [`RunContext`] carries everything a run reads: the source export, the
//! three templates, the resolved general-info mapping and the defaults.
//! [`process_run`] turns it into [`RunOutputs`] or an error, never a partial
//! result.
//!
//! # Example
//!
//! ```
//! use roster_model::{Cell, FieldMapping, MappingEntry, Table, Template, TemplateKind};
//! use roster_transform::{RunContext, process_run};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Table::from_rows(
//!     vec!["Id".into(), "Allied Certifications".into()],
//!     vec![vec![Cell::text("1001"), Cell::text("CPR, BLS")]],
//! )?;
//! let mut mapping = FieldMapping::new();
//! mapping.insert("Person_key", MappingEntry::auto("Id"));
//! mapping.insert("Status", MappingEntry::unmapped());
//!
//! let ctx = RunContext::new(source)
//!     .with_template(TemplateKind::General, Template::from_headers(["Person_key*", "Status*"])?)
//!     .with_template(
//!         TemplateKind::RequiredDocs,
//!         Template::from_headers(["Person_key", "CertificationCredentialName"])?,
//!     )
//!     .with_template(TemplateKind::Specialty, Template::from_headers(["Person_key", "Specialty"])?)
//!     .with_mapping(mapping);
//! let outputs = process_run(&ctx)?;
//!
//! assert_eq!(outputs.general_info.rows()[0][1], Cell::text("Active"));
//! assert_eq!(outputs.required_docs.height(), 2);
//! assert_eq!(outputs.specialty.height(), 0);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use roster_model::{FieldMapping, RequiredDefaults, Table, Template, TemplateKind};
use serde::Serialize;
use tracing::{info, info_span};

use crate::error::{Result, TransformError};
use crate::expand::{RecordSkip, expand_certifications, expand_specialties};
use crate::normalize::stringify;
use crate::project::{apply_required_defaults, project};

/// Inputs of one processing run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Loaded source export.
    pub source: Table,

    /// Destination templates by kind.
    pub templates: BTreeMap<TemplateKind, Template>,

    /// Resolved mapping for the general-info template.
    pub mapping: FieldMapping,

    /// Fallback values for blank required fields.
    pub defaults: RequiredDefaults,
}

impl RunContext {
    /// Creates a context with no templates, an empty mapping and the built-in defaults.
    pub fn new(source: Table) -> Self {
        Self {
            source,
            templates: BTreeMap::new(),
            mapping: FieldMapping::new(),
            defaults: RequiredDefaults::default(),
        }
    }

    pub fn with_template(mut self, kind: TemplateKind, template: Template) -> Self {
        self.templates.insert(kind, template);
        self
    }

    pub fn with_mapping(mut self, mapping: FieldMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn with_defaults(mut self, defaults: RequiredDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn template(&self, kind: TemplateKind) -> Result<&Template> {
        self.templates
            .get(&kind)
            .ok_or(TransformError::MissingTemplate(kind))
    }
}

/// The three output tables of a successful run. Every cell is text.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutputs {
    pub general_info: Table,
    pub required_docs: Table,
    pub specialty: Table,
    pub report: RunReport,
}

impl RunOutputs {
    pub fn table(&self, kind: TemplateKind) -> &Table {
        match kind {
            TemplateKind::General => &self.general_info,
            TemplateKind::RequiredDocs => &self.required_docs,
            TemplateKind::Specialty => &self.specialty,
        }
    }
}

/// Counts gathered during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub source_rows: usize,
    pub general_rows: usize,
    pub required_docs_rows: usize,
    pub specialty_rows: usize,
    /// Cells filled from required-field defaults.
    pub defaults_applied: usize,
    pub certification_skips: Vec<RecordSkip>,
    pub specialty_skips: Vec<RecordSkip>,
}

impl RunReport {
    pub fn rows_for(&self, kind: TemplateKind) -> usize {
        match kind {
            TemplateKind::General => self.general_rows,
            TemplateKind::RequiredDocs => self.required_docs_rows,
            TemplateKind::Specialty => self.specialty_rows,
        }
    }
}

/// Runs projection, defaulting, both expansions and stringification.
pub fn process_run(ctx: &RunContext) -> Result<RunOutputs> {
    let span = info_span!("run", source_rows = ctx.source.height());
    let _guard = span.enter();

    let general_template = ctx.template(TemplateKind::General)?;
    let docs_template = ctx.template(TemplateKind::RequiredDocs)?;
    let specialty_template = ctx.template(TemplateKind::Specialty)?;

    let mut general = project(general_template, &ctx.mapping, &ctx.source)?;
    let defaults_applied = apply_required_defaults(&mut general, &ctx.defaults);
    let general_info = stringify(general);

    let certifications = expand_certifications(&ctx.source, docs_template)?;
    let specialties = expand_specialties(&ctx.source, specialty_template)?;
    let required_docs = stringify(certifications.table);
    let specialty = stringify(specialties.table);

    let report = RunReport {
        source_rows: ctx.source.height(),
        general_rows: general_info.height(),
        required_docs_rows: required_docs.height(),
        specialty_rows: specialty.height(),
        defaults_applied,
        certification_skips: certifications.skipped,
        specialty_skips: specialties.skipped,
    };
    info!(
        general = report.general_rows,
        required_docs = report.required_docs_rows,
        specialty = report.specialty_rows,
        defaults_applied,
        "run complete"
    );

    Ok(RunOutputs {
        general_info,
        required_docs,
        specialty,
        report,
    })
}
