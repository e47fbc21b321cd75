use std::path::PathBuf;

use roster_map::MappingSummary;
use roster_model::{FieldMapping, Template, TemplateKind};
use roster_output::WrittenFiles;
use roster_transform::RunReport;

#[derive(Debug)]
pub struct ConvertResult {
    pub output_dir: PathBuf,
    pub mappings: Vec<(TemplateKind, MappingSummary)>,
    pub report: RunReport,
    /// `None` for dry runs.
    pub written: Option<WrittenFiles>,
}

#[derive(Debug)]
pub struct MapResult {
    pub kind: TemplateKind,
    pub template: Template,
    pub mapping: FieldMapping,
    pub summary: MappingSummary,
}
