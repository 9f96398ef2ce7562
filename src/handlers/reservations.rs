use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{NewReservation, Reservation};
use crate::services::reservations;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreatedResponse {
    success: bool,
    inserted_id: i64,
    confirmation: String,
    message: &'static str,
}

#[derive(Serialize)]
pub struct ReservationResponse {
    success: bool,
    data: Reservation,
}

#[derive(Serialize)]
pub struct MessageResponse {
    success: bool,
    message: &'static str,
}

// POST /api/reservations
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewReservation>,
) -> Result<Json<CreatedResponse>, AppError> {
    tracing::info!(
        confirmation = payload.confirmation.as_deref().unwrap_or("-"),
        has_transcript = payload.transcript.is_some(),
        "received reservation"
    );

    let reservation = reservations::create_reservation(&state, payload)?;

    Ok(Json(CreatedResponse {
        success: true,
        inserted_id: reservation.id,
        confirmation: reservation.confirmation,
        message: "Reservation saved successfully",
    }))
}

// GET /api/reservations
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    Ok(Json(reservations::list_reservations(&state)?))
}

// GET /api/reservations/:confirmation
pub async fn get_reservation(
    State(state): State<Arc<AppState>>,
    Path(confirmation): Path<String>,
) -> Result<Json<ReservationResponse>, AppError> {
    let reservation = reservations::get_reservation(&state, &confirmation)?;
    Ok(Json(ReservationResponse {
        success: true,
        data: reservation,
    }))
}

// DELETE /api/reservations/:confirmation
pub async fn cancel_reservation(
    State(state): State<Arc<AppState>>,
    Path(confirmation): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    reservations::cancel_reservation(&state, &confirmation)?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Reservation cancelled successfully",
    }))
}
