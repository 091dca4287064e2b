use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self::up()
    }
}

/// Handler for GET /health. Reports DOWN when the template store is unreachable.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.templates().health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::up())),
        Err(e) => {
            tracing::warn!(
                store = state.templates().name(),
                error = %e,
                "Template store health check failed"
            );
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::down()))
        },
    }
}
