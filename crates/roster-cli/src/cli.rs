//! CLI argument definitions for the roster mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::TemplateKind;

#[derive(Parser)]
#[command(
    name = "roster-mapper",
    version,
    about = "Convert a roster export into BlueSky import files",
    long_about = "Convert a vendor roster export into the three BlueSky import CSVs.\n\n\
                  Columns are matched to each template by name, certifications and\n\
                  specialties are expanded into one row per value, and the outputs\n\
                  are bundled into BlueSky_All_Files.zip."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a roster export into the three BlueSky CSV files.
    Convert(ConvertArgs),

    /// Show how the export's columns map onto one template.
    Map(MapArgs),

    /// Page through a CSV file, optionally filtered by one column.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Roster export (CSV).
    #[arg(long = "source", value_name = "CSV")]
    pub source: PathBuf,

    /// General-info template (CSV header).
    #[arg(long = "general", value_name = "CSV")]
    pub general: PathBuf,

    /// Required-docs template (CSV header).
    #[arg(long = "required-docs", value_name = "CSV")]
    pub required_docs: PathBuf,

    /// Specialty template (CSV header).
    #[arg(long = "specialty", value_name = "CSV")]
    pub specialty: PathBuf,

    /// Directory for generated files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Mapping configuration (defaults, fallback hints, manual overrides).
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Only use manual overrides and fallback hints; skip name matching.
    #[arg(long = "no-auto-map")]
    pub no_auto_map: bool,

    /// Skip writing BlueSky_All_Files.zip.
    #[arg(long = "no-archive")]
    pub no_archive: bool,

    /// Run the conversion and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Infer numeric column types instead of reading every column as text.
    #[arg(long = "infer-types")]
    pub infer_types: bool,

    /// Strip line breaks and collapse whitespace in every source value.
    #[arg(long = "clean-text")]
    pub clean_text: bool,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Roster export (CSV).
    #[arg(long = "source", value_name = "CSV")]
    pub source: PathBuf,

    /// Destination template (CSV header).
    #[arg(long = "template", value_name = "CSV")]
    pub template: PathBuf,

    /// Mapping configuration supplying overrides for this template.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Which template the file is.
    #[arg(long = "kind", value_enum, default_value = "general")]
    pub kind: TemplateKindArg,

    /// Only use manual overrides and fallback hints; skip name matching.
    #[arg(long = "no-auto-map")]
    pub no_auto_map: bool,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// CSV file to show.
    #[arg(value_name = "CSV")]
    pub path: PathBuf,

    /// Rows per page.
    #[arg(long = "rows", default_value_t = 20)]
    pub rows: usize,

    /// First row to show (zero-based, after filtering).
    #[arg(long = "start", default_value_t = 0)]
    pub start: usize,

    /// Column to search in.
    #[arg(long = "column", value_name = "NAME", requires = "search")]
    pub column: Option<String>,

    /// Case-insensitive substring to look for in --column.
    #[arg(long = "search", value_name = "TERM", requires = "column")]
    pub search: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateKindArg {
    General,
    RequiredDocs,
    Specialty,
}

impl From<TemplateKindArg> for TemplateKind {
    fn from(value: TemplateKindArg) -> Self {
        match value {
            TemplateKindArg::General => TemplateKind::General,
            TemplateKindArg::RequiredDocs => TemplateKind::RequiredDocs,
            TemplateKindArg::Specialty => TemplateKind::Specialty,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
