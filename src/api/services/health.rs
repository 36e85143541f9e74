//! Liveness probe.

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

/// Recorded once at startup so the probe can report uptime
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    uptime_seconds: u64,
}

pub async fn health_check(app_start_time: web::Data<AppStartTime>) -> impl Responder {
    let now = chrono::Utc::now();
    let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: now.to_rfc3339(),
        uptime_seconds,
    })
}
