//! Error type tests

use actix_web::http::StatusCode;

use salesboard::errors::SalesboardError;

#[test]
fn test_codes_are_stable() {
    assert_eq!(SalesboardError::missing_source_file("x").code(), "E001");
    assert_eq!(SalesboardError::workbook_parse("x").code(), "E002");
    assert_eq!(SalesboardError::database_unavailable("x").code(), "E003");
    assert_eq!(SalesboardError::database_operation("x").code(), "E004");
}

#[test]
fn test_display_uses_simple_format() {
    let err = SalesboardError::missing_source_file("spreadsheet not found: sales.csv");
    assert_eq!(
        err.to_string(),
        "Missing Source File: spreadsheet not found: sales.csv"
    );
}

#[test]
fn test_http_status_mapping() {
    assert_eq!(
        SalesboardError::database_unavailable("x").http_status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        SalesboardError::missing_source_file("x").http_status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        SalesboardError::workbook_parse("x").http_status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: SalesboardError = io.into();
    assert!(matches!(err, SalesboardError::FileOperation(_)));
}
