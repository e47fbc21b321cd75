use std::fs;

use roster_ingest::{IngestError, SourceOptions, read_source_table, read_template};
use roster_model::{Cell, ModelError};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn template_markers_are_stripped() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "general.csv",
        "Person_key*,Fname*,Lname*,MName,Status*\n",
    );
    let template = read_template(&path).expect("read template");
    assert_eq!(
        template.columns(),
        ["Person_key", "Fname", "Lname", "MName", "Status"]
    );
}

#[test]
fn template_with_bom_and_sample_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "specialty.csv",
        "\u{feff}Person_key,Specialty,Complete\nexample,ICU,Y\n",
    );
    let template = read_template(&path).expect("read template");
    assert_eq!(template.columns(), ["Person_key", "Specialty", "Complete"]);
}

#[test]
fn duplicate_template_columns_are_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "dup.csv", "Status*,Status\n");
    let err = read_template(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Template {
            source: ModelError::DuplicateColumn(_),
            ..
        }
    ));
}

#[test]
fn source_keeps_header_order_and_values() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "allied.csv",
        "Id,First Name,Allied Certifications\n\
         1,Ada,\"CPR, BLS\"\n\
         2,Grace,\n",
    );
    let table = read_source_table(&path, &SourceOptions::default()).expect("read source");
    assert_eq!(table.columns(), ["Id", "First Name", "Allied Certifications"]);
    assert_eq!(table.rows()[0][2], Cell::text("CPR, BLS"));
    assert!(table.rows()[1][2].is_blank());
}
