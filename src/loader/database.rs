//! SQLite-backed loading via SeaORM.

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde_json::Value;
use tracing::{debug, info};

use migration::entities::sale;
use migration::{Migrator, MigratorTrait};

use super::RecordSource;
use crate::errors::{Result, SalesboardError};
use crate::record::SalesRecord;

use async_trait::async_trait;

/// Connect to the SQLite database, creating the file when missing
pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::SqlitePool;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| SalesboardError::config(format!("invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(5));

    let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
        SalesboardError::database_unavailable(format!("cannot open SQLite database: {}", e))
    })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Run pending migrations
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| SalesboardError::database_operation(format!("migration failed: {}", e)))?;

    info!("Database migrations completed");
    Ok(())
}

/// `sales`-table-backed record source
pub struct TableSource {
    db: DatabaseConnection,
}

impl TableSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordSource for TableSource {
    fn name(&self) -> &'static str {
        "sql"
    }

    async fn load(&self) -> Result<Vec<SalesRecord>> {
        let models = sale::Entity::find()
            .order_by_asc(sale::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                SalesboardError::database_unavailable(format!("sales table query failed: {}", e))
            })?;

        debug!("Loaded {} records from sales table", models.len());
        Ok(models.into_iter().map(record_from_model).collect())
    }
}

/// Convert a table row into the shared record shape. NULL columns are
/// omitted, matching the spreadsheet loader's treatment of empty cells.
pub fn record_from_model(model: sale::Model) -> SalesRecord {
    let mut record = SalesRecord::new();
    record.insert("id", Value::Number(model.id.into()));
    if let Some(date) = model.date {
        record.insert("Date", Value::String(date));
    }
    if let Some(product) = model.product {
        record.insert("Product", Value::String(product));
    }
    if let Some(revenue) = model.revenue.and_then(serde_json::Number::from_f64) {
        record.insert("Revenue", Value::Number(revenue));
    }
    record
}
