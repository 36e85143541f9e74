//! Sales data endpoints.
//!
//! Every handler performs a fresh full read of its source and returns a bare
//! JSON array of records; an empty array is a valid response. Load errors
//! propagate as 5xx through `SalesboardError`'s `ResponseError` impl.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, info};

use crate::api::AppState;
use crate::errors::SalesboardError;
use crate::loader::{RecordSource, SourceKind, TableSource, WorkbookSource};
use crate::record::SalesRecord;

/// Query parameters of `GET /api/sales`.
///
/// `city`, `gender`, `payment`, `limit` and `offset` are accepted because the
/// dashboard sidebar sends them, but no filter consults them yet.
#[derive(Debug, Default, Deserialize)]
pub struct SalesQuery {
    pub source: Option<String>,
    pub product: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub payment: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

fn source_for(kind: SourceKind, state: &AppState) -> Box<dyn RecordSource> {
    match kind {
        SourceKind::Sql => Box::new(TableSource::new(state.db.clone())),
        SourceKind::Excel => Box::new(WorkbookSource::new(state.workbook_path.clone())),
    }
}

/// `GET /api/xlsx` - full spreadsheet-sourced dataset
pub async fn get_excel_data(
    state: web::Data<AppState>,
) -> Result<HttpResponse, SalesboardError> {
    let records = source_for(SourceKind::Excel, &state).load().await?;
    debug!("GET /api/xlsx -> {} records", records.len());
    Ok(HttpResponse::Ok().json(records))
}

/// `GET /api/sql` - full table-sourced dataset
pub async fn get_sql_data(state: web::Data<AppState>) -> Result<HttpResponse, SalesboardError> {
    let records = source_for(SourceKind::Sql, &state).load().await?;
    debug!("GET /api/sql -> {} records", records.len());
    Ok(HttpResponse::Ok().json(records))
}

/// `GET /api/sales` - filtered dataset
pub async fn get_sales_data(
    query: web::Query<SalesQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, SalesboardError> {
    let kind = SourceKind::from_param(query.source.as_deref());
    let records = source_for(kind, &state).load().await?;

    let total = records.len();
    let records = apply_filters(records, &query);

    info!(
        "GET /api/sales source={} -> {} of {} records",
        kind.as_str(),
        records.len(),
        total
    );
    Ok(HttpResponse::Ok().json(records))
}

/// Apply the supported field filters, keeping load order.
///
/// Only `product` is consulted: case-insensitive substring containment
/// against the `Product` field. Rows whose `Product` is absent never match.
/// An empty filter value means no filtering, matching the original surface
/// where an empty sidebar field is simply not sent.
pub fn apply_filters(records: Vec<SalesRecord>, query: &SalesQuery) -> Vec<SalesRecord> {
    match query.product.as_deref() {
        Some(product) if !product.is_empty() => records
            .into_iter()
            .filter(|r| r.field_contains("Product", product))
            .collect(),
        _ => records,
    }
}
