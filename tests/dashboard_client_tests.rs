//! Dashboard client tests
//!
//! Query construction and KPI computation; the transport itself is a single
//! ureq call with no logic worth mocking.

#![cfg(feature = "dashboard")]

use serde_json::json;

use salesboard::dashboard::{FetchError, Kpis, SalesFilter};
use salesboard::loader::SourceKind;
use salesboard::record::SalesRecord;

fn record(value: serde_json::Value) -> SalesRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_query_pairs_default_sends_only_source() {
    let filter = SalesFilter::default();
    assert_eq!(filter.query_pairs(), vec![("source", "xlsx".to_string())]);
}

#[test]
fn test_query_pairs_source_param_tracks_kind() {
    let filter = SalesFilter {
        source: SourceKind::Sql,
        ..Default::default()
    };
    assert_eq!(filter.source_param(), "sql");
    assert_eq!(filter.query_pairs()[0], ("source", "sql".to_string()));
}

#[test]
fn test_query_pairs_include_non_empty_fields_only() {
    let filter = SalesFilter {
        product: "Tea".to_string(),
        city: "  ".to_string(),
        payment: "Cash".to_string(),
        ..Default::default()
    };

    let pairs = filter.query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("source", "xlsx".to_string()),
            ("product", "Tea".to_string()),
            ("payment", "Cash".to_string()),
        ]
    );
}

#[test]
fn test_query_pairs_limit_offset_must_be_positive_numbers() {
    let filter = SalesFilter {
        limit: "25".to_string(),
        offset: "0".to_string(),
        ..Default::default()
    };
    let pairs = filter.query_pairs();
    assert!(pairs.contains(&("limit", "25".to_string())));
    assert!(!pairs.iter().any(|(k, _)| *k == "offset"));

    let garbage = SalesFilter {
        limit: "many".to_string(),
        ..Default::default()
    };
    assert!(!garbage.query_pairs().iter().any(|(k, _)| *k == "limit"));
}

#[test]
fn test_kpis_missing_columns_count_as_zero() {
    let records = vec![record(json!({"Product": "Green Tea"}))];
    let kpis = Kpis::compute(&records);

    assert_eq!(kpis.total_sales, 0.0);
    assert_eq!(kpis.avg_rating, 0.0);
    assert_eq!(kpis.avg_cogs, 0.0);
    assert_eq!(kpis.orders, 1);
}

#[test]
fn test_kpis_compute_from_present_columns() {
    let records = vec![
        record(json!({"Sales": 10.0, "Rating": 9.0, "cogs": 4.0})),
        record(json!({"Sales": 20.0, "Rating": 7.0, "cogs": 6.0})),
    ];
    let kpis = Kpis::compute(&records);

    assert_eq!(kpis.total_sales, 30.0);
    assert_eq!(kpis.avg_rating, 8.0);
    assert_eq!(kpis.avg_cogs, 5.0);
    assert_eq!(kpis.orders, 2);
}

#[test]
fn test_fetch_error_display_names_the_failure() {
    assert_eq!(
        FetchError::Status { code: 503 }.to_string(),
        "API request failed (503)"
    );
    assert!(
        FetchError::Transport("timed out".to_string())
            .to_string()
            .contains("timed out")
    );
}
