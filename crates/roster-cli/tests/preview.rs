//! Tests for the preview pager.

use roster_cli::preview::{PreviewQuery, preview_page};
use roster_model::{Cell, Table};

fn roster() -> Table {
    Table::from_rows(
        vec!["Id".into(), "Last Name".into(), "Region".into()],
        vec![
            vec![Cell::Number(1.0), Cell::text("Doe"), Cell::text("North")],
            vec![Cell::Number(2.0), Cell::text("Dorsey"), Cell::Missing],
            vec![Cell::Number(3.0), Cell::text("Smith"), Cell::text("NULL")],
            vec![Cell::Number(4.0), Cell::text("ODONNELL"), Cell::text("south")],
        ],
    )
    .unwrap()
}

#[test]
fn pages_are_stringified() {
    let page = preview_page(
        roster(),
        &PreviewQuery {
            start: 1,
            rows: 2,
            filter: None,
        },
    )
    .unwrap();

    assert_eq!(page.total_rows, 4);
    assert_eq!(page.matched_rows, 4);
    assert_eq!(
        page.rows,
        vec![vec!["2", "Dorsey", ""], vec!["3", "Smith", ""]]
    );
}

#[test]
fn search_is_case_insensitive_substring() {
    let page = preview_page(
        roster(),
        &PreviewQuery {
            start: 0,
            rows: 10,
            filter: Some(("Last Name".into(), "DO".into())),
        },
    )
    .unwrap();

    assert_eq!(page.matched_rows, 3);
    let ids: Vec<&str> = page.rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(ids, ["1", "2", "4"]);
}

#[test]
fn start_past_end_is_empty() {
    let page = preview_page(
        roster(),
        &PreviewQuery {
            start: 10,
            rows: 5,
            filter: None,
        },
    )
    .unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.columns.len(), 3);
}

#[test]
fn unknown_search_column_is_an_error() {
    let err = preview_page(
        roster(),
        &PreviewQuery {
            start: 0,
            rows: 5,
            filter: Some(("Email".into(), "x".into())),
        },
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "column 'Email' not found");
}
