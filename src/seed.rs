//! One-time database bootstrap.
//!
//! Creates the SQLite file, applies the schema migration, and copies the
//! spreadsheet into the `sales` table row by row. Idempotence is by file
//! existence only: when the database file is already there, nothing is
//! verified and nothing is written.

use std::path::{Path, PathBuf};

use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;
use tracing::info;

use migration::entities::sale;

use crate::errors::Result;
use crate::loader::{connect_sqlite, load_workbook, run_migrations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The database file already existed; no write happened
    AlreadyExists,
    /// Fresh database created, with this many rows inserted
    Seeded(usize),
}

/// Create and populate the sales database from the spreadsheet
pub async fn seed_database(database_url: &str, workbook_path: &Path) -> Result<SeedOutcome> {
    if let Some(file) = sqlite_file_path(database_url)
        && file.exists()
    {
        info!("Database {} already exists, skipping seed", file.display());
        return Ok(SeedOutcome::AlreadyExists);
    }

    let records = load_workbook(workbook_path)?;

    let db = connect_sqlite(database_url).await?;
    run_migrations(&db).await?;

    let mut inserted = 0;
    for record in &records {
        let row = sale::ActiveModel {
            date: Set(non_empty(record.display("Date"))),
            product: Set(non_empty(record.display("Product"))),
            revenue: Set(record.number("Revenue")),
            ..Default::default()
        };
        row.insert(&db).await?;
        inserted += 1;
    }

    info!(
        "Seeded {} rows from {} into {}",
        inserted,
        workbook_path.display(),
        database_url
    );
    Ok(SeedOutcome::Seeded(inserted))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Filesystem path behind a SQLite URL, `None` for in-memory databases
pub fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}
