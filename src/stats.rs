//! Summary statistics over a fetched record set.
//!
//! These mirror what the dashboard displays: plain sums, means, and
//! per-category totals. A missing column never errors; it yields zero or an
//! empty series, and the caller decides whether to render a placeholder.

use chrono::NaiveDate;

use crate::record::SalesRecord;

/// Columns probed, in order, when looking for a date axis
pub const DATE_COLUMN_CANDIDATES: &[&str] = &["Date", "Invoice Date", "date"];

/// Sum of a numeric column; 0.0 when the column is absent
pub fn sum_column(records: &[SalesRecord], column: &str) -> f64 {
    records.iter().filter_map(|r| r.number(column)).sum()
}

/// Mean of a numeric column over the rows that carry it; 0.0 when none do
pub fn mean_column(records: &[SalesRecord], column: &str) -> f64 {
    let values: Vec<f64> = records.iter().filter_map(|r| r.number(column)).collect();
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Per-category totals of `value_column` grouped by `key_column`.
///
/// Categories keep first-seen order. Rows missing either column are skipped.
/// Empty result means one of the columns is absent from the dataset.
pub fn group_sum(records: &[SalesRecord], key_column: &str, value_column: &str) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64)> = Vec::new();

    for record in records {
        let Some(key) = record.text(key_column) else {
            continue;
        };
        let Some(value) = record.number(value_column) else {
            continue;
        };

        match groups.iter_mut().find(|(k, _)| k == key) {
            Some((_, total)) => *total += value,
            None => groups.push((key.to_string(), value)),
        }
    }

    groups
}

/// First column from [`DATE_COLUMN_CANDIDATES`] present in the dataset
pub fn find_date_column(records: &[SalesRecord]) -> Option<&'static str> {
    DATE_COLUMN_CANDIDATES
        .iter()
        .find(|col| records.iter().any(|r| r.contains_key(col)))
        .copied()
}

/// Per-day totals of `value_column`, keyed by the parsed `date_column`,
/// sorted chronologically. Rows whose date does not parse are skipped.
pub fn date_series(
    records: &[SalesRecord],
    date_column: &str,
    value_column: &str,
) -> Vec<(NaiveDate, f64)> {
    let mut series: Vec<(NaiveDate, f64)> = Vec::new();

    for record in records {
        let Some(date) = record.text(date_column).and_then(parse_date) else {
            continue;
        };
        let Some(value) = record.number(value_column) else {
            continue;
        };

        match series.iter_mut().find(|(d, _)| *d == date) {
            Some((_, total)) => *total += value,
            None => series.push((date, value)),
        }
    }

    series.sort_by_key(|(date, _)| *date);
    series
}

/// Lenient date parsing: ISO dates, ISO datetimes (as emitted by the
/// spreadsheet loader), and the US-style dates the source files use.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date())
        })
        .or_else(|_| NaiveDate::parse_from_str(text, "%m/%d/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(text, "%m-%d-%Y"))
        .ok()
}
