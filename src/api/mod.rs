//! HTTP API: server assembly and request services.

pub mod routes;
pub mod services;

use std::path::PathBuf;

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::get_config;
use crate::loader::{connect_sqlite, run_migrations};
use services::health::AppStartTime;

/// Shared per-worker state. Holds the database handle and the workbook path;
/// record data itself is never cached, every request re-reads its source.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub workbook_path: PathBuf,
}

/// Start the HTTP server and block until shutdown
pub async fn run_server(host: &str, port: u16) -> Result<()> {
    let config = get_config();

    let db = connect_sqlite(&config.data.database_url).await?;
    run_migrations(&db).await?;

    let state = AppState {
        db,
        workbook_path: PathBuf::from(&config.data.workbook_path),
    };
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let bind_address = format!("{}:{}", host, port);
    info!("Starting server at http://{}", bind_address);
    info!(
        "Serving workbook {} and database {}",
        config.data.workbook_path, config.data.database_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(routes::api_routes)
            .configure(routes::health_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
