//! Data loading: spreadsheet- and table-backed sources.
//!
//! Every load reads the full source fresh; nothing is cached between
//! requests. Both sources produce the same in-memory shape, an ordered
//! `Vec<SalesRecord>` in storage order.

mod database;
mod workbook;

pub use database::{TableSource, connect_sqlite, record_from_model, run_migrations};
pub use workbook::{WorkbookSource, load_workbook};

use async_trait::async_trait;

use crate::errors::Result;
use crate::record::SalesRecord;

/// Which backing store a request reads from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    #[default]
    Excel,
    Sql,
}

impl SourceKind {
    /// Map the `source` query parameter. Anything that is not `sql` falls
    /// back to the spreadsheet source; an unsupported value is not an error.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("sql") => SourceKind::Sql,
            _ => SourceKind::Excel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Excel => "excel",
            SourceKind::Sql => "sql",
        }
    }
}

/// A full-dataset loader. Implementations re-read their backing store on
/// every call.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<Vec<SalesRecord>>;
}
