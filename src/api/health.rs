use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(err) => {
            error!("Database health check failed: {}", err);
            false
        }
    };

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if db_healthy { "ok" } else { "degraded" },
            "version": env!("CARGO_PKG_VERSION"),
            "db_healthy": db_healthy,
        })),
    )
}
