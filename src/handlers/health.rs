use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::queries;
use crate::state::AppState;

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "message": format!("{} API is running", state.config.restaurant_name),
        "timestamp": timestamp(),
    }))
}

// GET /api/reservations/health
pub async fn store_health(State(state): State<Arc<AppState>>) -> Response {
    let result = state
        .db()
        .map_err(|e| e.to_string())
        .and_then(|db| queries::ping(&db).map_err(|e| e.to_string()));

    match result {
        Ok(()) => Json(json!({
            "status": "OK",
            "message": format!("{} API and database are running", state.config.restaurant_name),
            "database": state.config.database_url,
            "timestamp": timestamp(),
        }))
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "ERROR",
                    "message": "Database connection failed",
                    "error": e,
                    "timestamp": timestamp(),
                })),
            )
                .into_response()
        }
    }
}
