//! Spreadsheet loading.
//!
//! Reads the whole first sheet into memory, first row as the header. Both
//! Excel workbooks (`.xlsx`/`.xls`) and CSV files are accepted; the seeder
//! and the API read through the same path. Empty cells are omitted from the
//! record rather than stored as null, since consumers treat absent and null
//! alike.

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use serde_json::Value;
use tracing::debug;

use super::RecordSource;
use crate::errors::{Result, SalesboardError};
use crate::record::SalesRecord;

use async_trait::async_trait;

/// Spreadsheet-backed record source
pub struct WorkbookSource {
    path: PathBuf,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for WorkbookSource {
    fn name(&self) -> &'static str {
        "excel"
    }

    async fn load(&self) -> Result<Vec<SalesRecord>> {
        let path = self.path.clone();
        // Workbook parsing is blocking I/O; keep it off the runtime workers
        tokio::task::spawn_blocking(move || load_workbook(&path))
            .await
            .map_err(|e| {
                SalesboardError::file_operation(format!("workbook read task failed: {}", e))
            })?
    }
}

/// Read a spreadsheet fully into memory, dispatching on the file extension
pub fn load_workbook(path: &Path) -> Result<Vec<SalesRecord>> {
    if !path.exists() {
        return Err(SalesboardError::missing_source_file(format!(
            "spreadsheet not found: {}",
            path.display()
        )));
    }

    let records = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => read_csv(path)?,
        _ => read_excel(path)?,
    };

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn read_excel(path: &Path) -> Result<Vec<SalesRecord>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| {
        SalesboardError::workbook_parse(format!("failed to open {}: {}", path.display(), e))
    })?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SalesboardError::workbook_parse("workbook has no sheets"))?;

    let range = workbook.worksheet_range(&sheet).map_err(|e| {
        SalesboardError::workbook_parse(format!("failed to read sheet {:?}: {}", sheet, e))
    })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };

    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    let mut records = Vec::new();
    for row in rows {
        let mut record = SalesRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() {
                continue;
            }
            if let Some(value) = cell_to_value(cell) {
                record.insert(header.clone(), value);
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }

    Ok(records)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_to_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::String(trimmed.to_string()))
            }
        }
        Data::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        Data::Int(i) => Some(Value::Number((*i).into())),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(serial) => serial
            .as_datetime()
            .map(|dt| Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

fn read_csv(path: &Path) -> Result<Vec<SalesRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = SalesRecord::new();
        for (header, field) in headers.iter().zip(row.iter()) {
            if header.is_empty() || field.is_empty() {
                continue;
            }
            record.insert(header.clone(), csv_field_to_value(field));
        }
        if !record.is_empty() {
            records.push(record);
        }
    }

    Ok(records)
}

/// CSV carries no types; numeric-looking fields become JSON numbers so both
/// spreadsheet formats feed the same downstream arithmetic.
fn csv_field_to_value(field: &str) -> Value {
    if let Ok(number) = field.parse::<f64>()
        && let Some(number) = serde_json::Number::from_f64(number)
    {
        return Value::Number(number);
    }
    Value::String(field.to_string())
}
