use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Ready once the backing store answers.
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if state.readiness.is_ready().await {
        StatusCode::OK
    } else {
        tracing::warn!("Readiness probe failed: database unreachable");
        StatusCode::SERVICE_UNAVAILABLE
    }
}
