//! Summary statistics tests

use chrono::NaiveDate;
use serde_json::json;

use salesboard::record::SalesRecord;
use salesboard::stats::{
    date_series, find_date_column, group_sum, mean_column, sum_column,
};

fn record(value: serde_json::Value) -> SalesRecord {
    serde_json::from_value(value).unwrap()
}

fn sample() -> Vec<SalesRecord> {
    vec![
        record(json!({"Product line": "Beverages", "City": "Yangon", "Sales": 10.0, "Rating": 8.0, "Date": "2024-01-02"})),
        record(json!({"Product line": "Snacks", "City": "Mandalay", "Sales": 5.0, "Rating": 6.0, "Date": "2024-01-01"})),
        record(json!({"Product line": "Beverages", "City": "Yangon", "Sales": 2.5, "Date": "2024-01-02"})),
    ]
}

#[test]
fn test_sum_and_mean_with_missing_column_are_zero() {
    let records = sample();
    assert_eq!(sum_column(&records, "cogs"), 0.0);
    assert_eq!(mean_column(&records, "cogs"), 0.0);
    assert_eq!(sum_column(&[], "Sales"), 0.0);
}

#[test]
fn test_sum_and_mean_skip_rows_without_the_column() {
    let records = sample();
    assert_eq!(sum_column(&records, "Sales"), 17.5);
    // Third record has no Rating; the mean is over the two that do
    assert_eq!(mean_column(&records, "Rating"), 7.0);
}

#[test]
fn test_group_sum_keeps_first_seen_order() {
    let records = sample();
    let groups = group_sum(&records, "Product line", "Sales");
    assert_eq!(
        groups,
        vec![("Beverages".to_string(), 12.5), ("Snacks".to_string(), 5.0)]
    );
}

#[test]
fn test_group_sum_missing_columns_yield_empty() {
    let records = sample();
    assert!(group_sum(&records, "Payment", "Sales").is_empty());
    assert!(group_sum(&records, "Product line", "Quantity").is_empty());
}

#[test]
fn test_find_date_column_probes_candidates_in_order() {
    assert_eq!(find_date_column(&sample()), Some("Date"));

    let invoice = vec![record(json!({"Invoice Date": "01/05/2024", "Sales": 1.0}))];
    assert_eq!(find_date_column(&invoice), Some("Invoice Date"));

    let none = vec![record(json!({"Sales": 1.0}))];
    assert_eq!(find_date_column(&none), None);
}

#[test]
fn test_date_series_sums_per_day_and_sorts() {
    let records = sample();
    let series = date_series(&records, "Date", "Sales");

    assert_eq!(
        series,
        vec![
            (NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 5.0),
            (NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 12.5),
        ]
    );
}

#[test]
fn test_date_series_accepts_datetime_and_us_formats() {
    let records = vec![
        record(json!({"Date": "2024-01-02T00:00:00", "Sales": 1.0})),
        record(json!({"Date": "01/02/2024", "Sales": 2.0})),
        record(json!({"Date": "not a date", "Sales": 4.0})),
    ];

    let series = date_series(&records, "Date", "Sales");
    assert_eq!(
        series,
        vec![(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 3.0)]
    );
}
