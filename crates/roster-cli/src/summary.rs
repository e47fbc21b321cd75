use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::preview::PreviewPage;
use roster_model::{MappingEntry, MappingOrigin, TemplateKind};
use roster_transform::RecordSkip;

use crate::types::{ConvertResult, MapResult};

pub fn print_convert_summary(result: &ConvertResult) {
    match &result.written {
        Some(written) => {
            println!("Output: {}", result.output_dir.display());
            if let Some(path) = &written.archive {
                println!("Archive: {}", path.display());
            }
        }
        None => println!("Dry run: no files written"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Output"),
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Mapped"),
        header_cell("Auto"),
        header_cell("Manual"),
        header_cell("Fallback"),
        header_cell("Unmapped"),
        header_cell("Skipped"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (kind, summary) in &result.mappings {
        let skipped = match kind {
            TemplateKind::General => None,
            TemplateKind::RequiredDocs => Some(result.report.certification_skips.len()),
            TemplateKind::Specialty => Some(result.report.specialty_skips.len()),
        };
        table.add_row(vec![
            Cell::new(kind.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(kind.file_name()),
            Cell::new(result.report.rows_for(*kind)),
            Cell::new(summary.mapped()),
            count_cell(Some(summary.auto), Color::Green),
            count_cell(Some(summary.manual), Color::Cyan),
            count_cell(Some(summary.fallback), Color::Cyan),
            count_cell(Some(summary.unmapped()), Color::Yellow),
            count_cell(skipped, Color::Yellow),
        ]);
    }
    println!("{table}");
    println!(
        "Source rows: {}, defaults applied: {}",
        result.report.source_rows, result.report.defaults_applied
    );
    print_skips("Certification skips", &result.report.certification_skips);
    print_skips("Specialty skips", &result.report.specialty_skips);
}

pub fn print_mapping(result: &MapResult) {
    println!("Template: {} ({})", result.kind.label(), result.kind.file_name());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Destination"),
        header_cell("Source"),
        header_cell("Origin"),
    ]);
    apply_table_style(&mut table);
    for column in result.template.columns() {
        let entry = result.mapping.get(column);
        let source = entry.and_then(MappingEntry::source).map_or_else(|| dim_cell("-"), Cell::new);
        let origin = entry.map_or(MappingOrigin::Unmapped, |e| e.origin);
        table.add_row(vec![Cell::new(column), source, origin_cell(origin)]);
    }
    println!("{table}");
    println!(
        "{} of {} columns mapped ({} auto, {} manual, {} fallback)",
        result.summary.mapped(),
        result.summary.total,
        result.summary.auto,
        result.summary.manual,
        result.summary.fallback
    );
}

pub fn print_preview(page: &PreviewPage) {
    let mut table = Table::new();
    table.set_header(page.columns.iter().map(|c| header_cell(c)));
    apply_table_style(&mut table);
    for row in &page.rows {
        table.add_row(row);
    }
    println!("{table}");
    let end = page.start + page.rows.len();
    if page.matched_rows == page.total_rows {
        println!("Rows {}-{} of {}", page.start, end, page.total_rows);
    } else {
        println!(
            "Rows {}-{} of {} matching ({} total)",
            page.start, end, page.matched_rows, page.total_rows
        );
    }
}

fn print_skips(label: &str, skips: &[RecordSkip]) {
    if skips.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for skip in skips {
        table.add_row(vec![Cell::new(skip.row), Cell::new(skip.reason)]);
    }
    println!();
    println!("{label}:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn origin_cell(origin: MappingOrigin) -> Cell {
    let cell = Cell::new(origin.label());
    match origin {
        MappingOrigin::Auto => cell.fg(Color::Green),
        MappingOrigin::Manual | MappingOrigin::Fallback => cell.fg(Color::Cyan),
        MappingOrigin::Unmapped => cell.fg(Color::DarkGrey),
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
