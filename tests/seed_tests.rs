//! Database bootstrap tests

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use tempfile::TempDir;

use migration::entities::sale;
use salesboard::errors::SalesboardError;
use salesboard::loader::connect_sqlite;
use salesboard::seed::{SeedOutcome, seed_database, sqlite_file_path};

fn setup(dir: &TempDir, workbook_csv: &str) -> (String, std::path::PathBuf) {
    let workbook = dir.path().join("sales.csv");
    std::fs::write(&workbook, workbook_csv).unwrap();
    let db_path = dir.path().join("sales.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    (db_url, workbook)
}

const WORKBOOK_CSV: &str = "\
Date,Product,Revenue
2024-01-02,Green Tea,12.5
2024-01-03,Coffee,8.0
2024-01-04,Sparkling Water,3.25
";

#[tokio::test]
async fn test_seed_creates_and_populates() {
    let dir = TempDir::new().unwrap();
    let (db_url, workbook) = setup(&dir, WORKBOOK_CSV);

    let outcome = seed_database(&db_url, &workbook).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded(3));

    let db = connect_sqlite(&db_url).await.unwrap();
    let rows = sale::Entity::find()
        .order_by_asc(sale::Column::Id)
        .all(&db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].product.as_deref(), Some("Green Tea"));
    assert_eq!(rows[0].date.as_deref(), Some("2024-01-02"));
    assert_eq!(rows[0].revenue, Some(12.5));
    assert_eq!(rows[2].product.as_deref(), Some("Sparkling Water"));
}

#[tokio::test]
async fn test_seed_is_idempotent_by_file_existence() {
    let dir = TempDir::new().unwrap();
    let (db_url, workbook) = setup(&dir, WORKBOOK_CSV);

    assert_eq!(
        seed_database(&db_url, &workbook).await.unwrap(),
        SeedOutcome::Seeded(3)
    );

    // Second run must not write, even with a different workbook on disk
    std::fs::write(&workbook, "Date,Product,Revenue\n2024-05-05,Juice,1.0\n").unwrap();
    assert_eq!(
        seed_database(&db_url, &workbook).await.unwrap(),
        SeedOutcome::AlreadyExists
    );

    let db = connect_sqlite(&db_url).await.unwrap();
    let count = sale::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_seed_missing_workbook_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let (db_url, _) = setup(&dir, WORKBOOK_CSV);
    let absent = dir.path().join("absent.csv");

    let err = seed_database(&db_url, &absent).await.unwrap_err();
    assert!(matches!(err, SalesboardError::MissingSourceFile(_)));
    assert!(!dir.path().join("sales.db").exists());
}

#[tokio::test]
async fn test_seed_rows_with_missing_cells_insert_nulls() {
    let dir = TempDir::new().unwrap();
    let (db_url, workbook) = setup(&dir, "Date,Product,Revenue\n2024-01-02,,\n");

    assert_eq!(
        seed_database(&db_url, &workbook).await.unwrap(),
        SeedOutcome::Seeded(1)
    );

    let db = connect_sqlite(&db_url).await.unwrap();
    let row = sale::Entity::find().one(&db).await.unwrap().unwrap();
    assert_eq!(row.date.as_deref(), Some("2024-01-02"));
    assert_eq!(row.product, None);
    assert_eq!(row.revenue, None);
}

#[test]
fn test_sqlite_file_path_parsing() {
    assert_eq!(
        sqlite_file_path("sqlite://sales.db?mode=rwc"),
        Some(std::path::PathBuf::from("sales.db"))
    );
    assert_eq!(
        sqlite_file_path("sqlite:data/sales.db"),
        Some(std::path::PathBuf::from("data/sales.db"))
    );
    assert_eq!(sqlite_file_path("sqlite://:memory:"), None);
}
