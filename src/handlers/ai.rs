use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ExtractedFields;
use crate::services::ai::details::extract_completion_details;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompletionRequest {
    pub input: String,
}

#[derive(Serialize)]
pub struct CompletionResponse {
    pub response: String,
    pub details: ExtractedFields,
}

// POST /api/ai/complete
pub async fn complete(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompletionRequest>,
) -> Result<Json<CompletionResponse>, AppError> {
    let provider = state.completion.as_ref().ok_or(AppError::AiUnavailable)?;

    let response = provider.complete(&payload.input).await.map_err(|e| {
        tracing::warn!(provider = provider.name(), error = %e, "completion failed");
        AppError::Ai(e.to_string())
    })?;

    let details = extract_completion_details(&response);

    Ok(Json(CompletionResponse { response, details }))
}
