//! Route tables for the HTTP surface.

use actix_web::web;

use super::services::{health, sales};

/// The data endpoints: full dumps of either source plus the filtered view
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/xlsx", web::get().to(sales::get_excel_data))
            .route("/sql", web::get().to(sales::get_sql_data))
            .route("/sales", web::get().to(sales::get_sales_data)),
    );
}

/// Liveness probe, outside the data surface
pub fn health_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));
}
