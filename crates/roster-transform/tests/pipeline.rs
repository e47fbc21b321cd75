//! End-to-end tests for the transformation engine on small in-memory exports.

use proptest::prelude::*;
use roster_model::{
    CERTIFICATION_NAME_COLUMN, CERTIFICATIONS_COLUMN, Cell, FieldMapping, MappingEntry,
    PERSON_KEY_COLUMN, RequiredDefaults, SOURCE_ID_COLUMN, SPECIALTY_COLUMNS,
    SPECIALTY_NAME_COLUMN, Table, Template, TemplateKind,
};
use roster_transform::{
    RecordSkip, RunContext, SkipReason, TransformError, expand_certifications,
    expand_specialties, process_run, project, stringify,
};

fn source_table(rows: Vec<Vec<Cell>>) -> Table {
    let mut columns = vec![
        SOURCE_ID_COLUMN.to_string(),
        "Last Name".to_string(),
        "Status".to_string(),
        CERTIFICATIONS_COLUMN.to_string(),
    ];
    columns.extend(SPECIALTY_COLUMNS.iter().map(|c| (*c).to_string()));
    Table::from_rows(columns, rows).unwrap()
}

fn row(id: Cell, status: &str, certs: Cell, specialties: [Cell; 3]) -> Vec<Cell> {
    let [s1, s2, s3] = specialties;
    vec![id, Cell::text("Doe"), Cell::text(status), certs, s1, s2, s3]
}

fn docs_template() -> Template {
    Template::from_headers([
        "Person_key*",
        "CertificationCredentialName*",
        "IssueComment",
        "Expiration Date",
    ])
    .unwrap()
}

fn specialty_template() -> Template {
    Template::from_headers(["Person_key", "Specialty", "Complete"]).unwrap()
}

fn general_template() -> Template {
    Template::from_headers(["Person_key*", "Lname*", "Status*", "Region"]).unwrap()
}

fn general_mapping() -> FieldMapping {
    let mut mapping = FieldMapping::new();
    mapping.insert("Person_key", MappingEntry::fallback("Id"));
    mapping.insert("Lname", MappingEntry::manual(Some("Last Name".to_string())));
    mapping.insert("Status", MappingEntry::auto("Status"));
    mapping.insert("Region", MappingEntry::unmapped());
    mapping
}

fn text_rows(table: &Table) -> Vec<Vec<String>> {
    table
        .rows()
        .iter()
        .map(|row| row.iter().map(Cell::display_string).collect())
        .collect()
}

#[test]
fn certifications_split_and_skip_blanks() {
    let source = source_table(vec![row(
        Cell::text("1001"),
        "",
        Cell::text("CPR, , BLS"),
        [Cell::Missing, Cell::Missing, Cell::Missing],
    )]);

    let expansion = expand_certifications(&source, &docs_template()).unwrap();

    assert_eq!(expansion.table.columns(), docs_template().columns());
    assert_eq!(
        text_rows(&expansion.table),
        vec![
            vec!["1001", "CPR", "", ""],
            vec!["1001", "BLS", "", ""],
        ]
    );
    assert!(expansion.skipped.is_empty());
}

#[test]
fn nan_certifications_produce_no_rows() {
    let source = source_table(vec![
        row(
            Cell::text("1"),
            "",
            Cell::text("nan"),
            [Cell::Missing, Cell::Missing, Cell::Missing],
        ),
        row(
            Cell::text("2"),
            "",
            Cell::Missing,
            [Cell::Missing, Cell::Missing, Cell::Missing],
        ),
    ]);

    let expansion = expand_certifications(&source, &docs_template()).unwrap();

    assert_eq!(expansion.table.height(), 0);
    assert_eq!(expansion.table.columns(), docs_template().columns());
    assert_eq!(
        expansion.skipped,
        vec![
            RecordSkip {
                row: 0,
                reason: SkipReason::NoCertifications
            },
            RecordSkip {
                row: 1,
                reason: SkipReason::NoCertifications
            },
        ]
    );
}

#[test]
fn missing_identifier_is_reported_not_fatal() {
    let source = source_table(vec![
        row(
            Cell::Missing,
            "",
            Cell::text("CPR"),
            [Cell::text("ICU"), Cell::Missing, Cell::Missing],
        ),
        row(
            Cell::text("7"),
            "",
            Cell::text("CPR"),
            [Cell::text("ICU"), Cell::Missing, Cell::Missing],
        ),
    ]);

    let certs = expand_certifications(&source, &docs_template()).unwrap();
    let specialties = expand_specialties(&source, &specialty_template()).unwrap();

    assert_eq!(certs.table.height(), 1);
    assert_eq!(certs.missing_identifiers(), 1);
    assert_eq!(specialties.table.height(), 1);
    assert_eq!(
        specialties.skipped,
        vec![RecordSkip {
            row: 0,
            reason: SkipReason::MissingIdentifier
        }]
    );
}

#[test]
fn specialties_deduplicate_case_insensitively() {
    let source = source_table(vec![row(
        Cell::text("1001"),
        "",
        Cell::Missing,
        [Cell::text("Wound Care, ICU"), Cell::text("icu"), Cell::text("")],
    )]);

    let expansion = expand_specialties(&source, &specialty_template()).unwrap();

    assert_eq!(
        text_rows(&expansion.table),
        vec![
            vec!["1001", "Wound Care", ""],
            vec!["1001", "ICU", ""],
        ]
    );
}

#[test]
fn specialties_deduplicate_per_record_only() {
    let source = source_table(vec![
        row(
            Cell::text("1"),
            "",
            Cell::Missing,
            [Cell::text("ICU"), Cell::Missing, Cell::Missing],
        ),
        row(
            Cell::text("2"),
            "",
            Cell::Missing,
            [Cell::Missing, Cell::Missing, Cell::text("icu")],
        ),
    ]);

    let expansion = expand_specialties(&source, &specialty_template()).unwrap();
    assert_eq!(
        text_rows(&expansion.table),
        vec![vec!["1", "ICU", ""], vec!["2", "icu", ""]]
    );
}

#[test]
fn template_without_name_column_still_emits_rows() {
    let source = source_table(vec![row(
        Cell::text("5"),
        "",
        Cell::text("CPR"),
        [Cell::Missing, Cell::Missing, Cell::Missing],
    )]);
    let template = Template::from_headers([PERSON_KEY_COLUMN, "Note"]).unwrap();

    let expansion = expand_certifications(&source, &template).unwrap();
    assert_eq!(text_rows(&expansion.table), vec![vec!["5", ""]]);
    assert!(!template.contains(CERTIFICATION_NAME_COLUMN));
    assert!(!template.contains(SPECIALTY_NAME_COLUMN));
}

#[test]
fn full_run_produces_all_three_tables() {
    let source = source_table(vec![
        row(
            Cell::Number(1001.0),
            "",
            Cell::text("CPR, BLS"),
            [Cell::text("ICU"), Cell::Missing, Cell::Missing],
        ),
        row(
            Cell::Number(1002.0),
            "Inactive",
            Cell::text("None"),
            [Cell::Missing, Cell::text("null"), Cell::Missing],
        ),
    ]);
    let ctx = RunContext::new(source)
        .with_template(TemplateKind::General, general_template())
        .with_template(TemplateKind::RequiredDocs, docs_template())
        .with_template(TemplateKind::Specialty, specialty_template())
        .with_mapping(general_mapping());

    let outputs = process_run(&ctx).unwrap();

    assert_eq!(
        text_rows(&outputs.general_info),
        vec![
            vec!["1001", "Doe", "Active", "Unknown Region"],
            vec!["1002", "Doe", "Inactive", "Unknown Region"],
        ]
    );
    assert_eq!(outputs.required_docs.height(), 2);
    assert_eq!(outputs.specialty.height(), 1);
    assert_eq!(outputs.report.source_rows, 2);
    assert_eq!(outputs.report.defaults_applied, 3);
    assert_eq!(outputs.report.rows_for(TemplateKind::RequiredDocs), 2);
    assert_eq!(outputs.report.certification_skips.len(), 1);
    assert_eq!(outputs.report.specialty_skips.len(), 1);
    assert_eq!(outputs.table(TemplateKind::Specialty), &outputs.specialty);
}

#[test]
fn run_without_template_fails() {
    let ctx = RunContext::new(source_table(Vec::new()))
        .with_template(TemplateKind::General, general_template())
        .with_mapping(general_mapping());
    let err = process_run(&ctx).unwrap_err();
    assert!(matches!(
        err,
        TransformError::MissingTemplate(TemplateKind::RequiredDocs)
    ));
}

#[test]
fn custom_defaults_replace_builtins() {
    let source = source_table(vec![row(
        Cell::text("1"),
        "",
        Cell::Missing,
        [Cell::Missing, Cell::Missing, Cell::Missing],
    )]);
    let ctx = RunContext::new(source)
        .with_template(TemplateKind::General, general_template())
        .with_template(TemplateKind::RequiredDocs, docs_template())
        .with_template(TemplateKind::Specialty, specialty_template())
        .with_mapping(general_mapping())
        .with_defaults(RequiredDefaults::empty().with("Status", "Pending"));

    let outputs = process_run(&ctx).unwrap();
    assert_eq!(text_rows(&outputs.general_info), vec![vec!["1", "Doe", "Pending", ""]]);
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Missing),
        Just(Cell::Number(f64::NAN)),
        any::<i32>().prop_map(|n| Cell::Number(f64::from(n))),
        prop::sample::select(vec!["nan", "NaT", "<NA>", "None", "none", "NULL", "null"])
            .prop_map(Cell::text),
        "[ a-zA-Z0-9,]{0,12}".prop_map(Cell::text),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..5).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(arb_cell(), width), 0..8).prop_map(
            move |rows| {
                let columns = (0..width).map(|i| format!("c{i}")).collect();
                Table::from_rows(columns, rows).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn stringify_is_idempotent_and_text_only(table in arb_table()) {
        let once = stringify(table);
        let twice = stringify(once.clone());
        prop_assert_eq!(&once, &twice);
        for cell in once.rows().iter().flatten() {
            let text = cell.as_text();
            prop_assert!(text.is_some());
            prop_assert!(!roster_model::is_missing_token(text.unwrap_or_default()));
        }
    }

    #[test]
    fn projection_matches_template_shape(
        table in arb_table(),
        mapped in prop::collection::vec(any::<bool>(), 6),
    ) {
        let destinations: Vec<String> = (0..6).map(|i| format!("d{i}")).collect();
        let template = Template::new(destinations.clone()).unwrap();
        let mut mapping = FieldMapping::new();
        // Mappings past the table width point at columns that do not exist.
        for (i, destination) in destinations.iter().enumerate() {
            let entry = if mapped[i] {
                MappingEntry::auto(format!("c{i}"))
            } else {
                MappingEntry::unmapped()
            };
            mapping.insert(destination.clone(), entry);
        }

        let projected = project(&template, &mapping, &table).unwrap();
        prop_assert_eq!(projected.columns(), template.columns());
        prop_assert_eq!(projected.height(), table.height());
        for (i, destination) in destinations.iter().enumerate() {
            let copied = mapped[i] && i < table.width();
            for (row, cell) in projected.column(destination).into_iter().flatten().enumerate() {
                if copied {
                    prop_assert_eq!(cell.display_string(), table.rows()[row][i].display_string());
                } else {
                    prop_assert_eq!(cell, &Cell::empty());
                }
            }
        }
    }
}
