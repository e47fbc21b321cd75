use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_cli::preview::{PreviewPage, PreviewQuery, preview_page};
use roster_ingest::{SourceOptions, read_source_table, read_template};
use roster_map::{MappingSession, MappingSummary, RosterConfig};
use roster_model::{Table, Template, TemplateKind};
use roster_output::{WriteOptions, write_outputs};
use roster_transform::{RunContext, process_run};

use crate::cli::{ConvertArgs, MapArgs, PreviewArgs};
use crate::types::{ConvertResult, MapResult};

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", source = %args.source.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let options = SourceOptions::default()
        .with_infer_types(args.infer_types)
        .with_clean_text(args.clean_text);
    let source = load_source(&args.source, &options)?;
    let templates = [
        (TemplateKind::General, load_template(&args.general)?),
        (TemplateKind::RequiredDocs, load_template(&args.required_docs)?),
        (TemplateKind::Specialty, load_template(&args.specialty)?),
    ];

    let mut session =
        MappingSession::new(source.columns().to_vec()).with_fallback(config.fallback.clone());
    let mut mappings = Vec::with_capacity(templates.len());
    for (kind, template) in &templates {
        let mapping = session
            .resolve(
                *kind,
                template,
                !args.no_auto_map,
                config.mapping.for_kind(*kind),
            )
            .with_context(|| format!("resolve {kind} mapping"))?;
        mappings.push((*kind, MappingSummary::of(mapping, template)));
    }
    let general_mapping = session
        .mapping(TemplateKind::General)
        .cloned()
        .unwrap_or_default();

    let mut ctx = RunContext::new(source)
        .with_mapping(general_mapping)
        .with_defaults(config.required_defaults());
    for (kind, template) in templates {
        ctx = ctx.with_template(kind, template);
    }
    let outputs = process_run(&ctx).context("process run")?;

    let written = if args.dry_run {
        info!("dry run: no files written");
        None
    } else {
        let options = WriteOptions {
            archive: !args.no_archive,
        };
        let written = write_outputs(&args.output_dir, &outputs, options)
            .with_context(|| format!("write outputs to {}", args.output_dir.display()))?;
        Some(written)
    };

    Ok(ConvertResult {
        output_dir: args.output_dir.clone(),
        mappings,
        report: outputs.report,
        written,
    })
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let config = load_config(args.config.as_deref())?;
    let source = load_source(&args.source, &SourceOptions::default())?;
    let template = load_template(&args.template)?;
    let kind = TemplateKind::from(args.kind);

    let mut session =
        MappingSession::new(source.columns().to_vec()).with_fallback(config.fallback.clone());
    let mapping = session
        .resolve(
            kind,
            &template,
            !args.no_auto_map,
            config.mapping.for_kind(kind),
        )
        .with_context(|| format!("resolve {kind} mapping"))?
        .clone();
    let summary = MappingSummary::of(&mapping, &template);

    Ok(MapResult {
        kind,
        template,
        mapping,
        summary,
    })
}

pub fn run_preview(args: &PreviewArgs) -> Result<PreviewPage> {
    let table = load_source(&args.path, &SourceOptions::default())?;
    let query = PreviewQuery {
        start: args.start,
        rows: args.rows,
        filter: args.column.clone().zip(args.search.clone()),
    };
    preview_page(table, &query)
}

fn load_config(path: Option<&Path>) -> Result<RosterConfig> {
    match path {
        Some(path) => {
            RosterConfig::load(path).with_context(|| format!("load config {}", path.display()))
        }
        None => Ok(RosterConfig::default()),
    }
}

fn load_source(path: &Path, options: &SourceOptions) -> Result<Table> {
    read_source_table(path, options).with_context(|| format!("read source {}", path.display()))
}

fn load_template(path: &Path) -> Result<Template> {
    read_template(path).with_context(|| format!("read template {}", path.display()))
}
