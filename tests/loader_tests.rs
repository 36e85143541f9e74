//! Loader tests
//!
//! CSV is the fixture format here; the Excel path shares the same record
//! assembly and is covered by the cell-mapping rules it is written against.

use tempfile::TempDir;

use salesboard::errors::SalesboardError;
use salesboard::loader::{RecordSource, WorkbookSource, load_workbook};

fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_csv_numbers_are_sniffed_and_order_kept() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sales.csv",
        "Date,Product,Revenue,Invoice ID\n\
         2024-01-02,Green Tea,12.5,750-67-8428\n\
         2024-01-03,Coffee,8,226-31-3081\n",
    );

    let records = load_workbook(&path).unwrap();
    assert_eq!(records.len(), 2);

    // Numeric-looking cells become numbers, everything else stays text
    assert_eq!(records[0].number("Revenue"), Some(12.5));
    assert_eq!(records[1].number("Revenue"), Some(8.0));
    assert_eq!(records[0].text("Invoice ID"), Some("750-67-8428"));
    assert_eq!(records[0].text("Date"), Some("2024-01-02"));

    assert_eq!(records[0].text("Product"), Some("Green Tea"));
    assert_eq!(records[1].text("Product"), Some("Coffee"));
}

#[test]
fn test_csv_empty_cells_are_omitted() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sales.csv",
        "Date,Product,Revenue\n2024-01-02,,12.5\n",
    );

    let records = load_workbook(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].contains_key("Product"));
    assert_eq!(records[0].number("Revenue"), Some(12.5));
}

#[test]
fn test_headers_only_yields_no_records() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "sales.csv", "Date,Product,Revenue\n");

    let records = load_workbook(&path).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_missing_file_is_missing_source_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let err = load_workbook(&path).unwrap_err();
    assert!(matches!(err, SalesboardError::MissingSourceFile(_)));
    assert_eq!(err.code(), "E001");
}

#[tokio::test]
async fn test_workbook_source_loads_through_trait() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sales.csv",
        "Date,Product,Revenue\n2024-01-02,Green Tea,12.5\n",
    );

    let source = WorkbookSource::new(path);
    assert_eq!(source.name(), "excel");

    let records = source.load().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].text("Product"), Some("Green Tea"));
}
