//! Health check handler.

use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;

/// `GET /api/health` — liveness check. Never touches the store.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".into(),
        message: "Server is running".into(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
