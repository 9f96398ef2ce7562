use axum::Json;
use serde::Deserialize;

use crate::models::ExtractedFields;
use crate::services::extractor::extract_fields;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub utterance: String,
}

// POST /api/extract
pub async fn extract(Json(payload): Json<ExtractRequest>) -> Json<ExtractedFields> {
    let fields = extract_fields(&payload.utterance);
    tracing::info!(
        name = fields.name.is_some(),
        date = fields.date.is_some(),
        time = fields.time.is_some(),
        guests = fields.guests.is_some(),
        "extracted utterance"
    );
    Json(fields)
}
