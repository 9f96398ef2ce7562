use crate::db::queries::{self, ReservationInsert};
use crate::errors::AppError;
use crate::models::{NewReservation, Reservation};
use crate::services::extractor::extract_fields;
use crate::services::extractor::guests::{MAX_GUESTS, MIN_GUESTS};
use crate::state::AppState;

const CODE_ATTEMPTS: usize = 5;

/// `<prefix>` followed by six uppercase hex characters.
pub fn generate_confirmation(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", id[..6].to_uppercase())
}

pub fn create_reservation(
    state: &AppState,
    mut new: NewReservation,
) -> Result<Reservation, AppError> {
    if let Some(transcript) = new.transcript.as_deref() {
        let fields = extract_fields(transcript);
        tracing::debug!(?fields, "fields extracted from transcript");
        new.fill_missing(&fields);
    }

    if let Some(guests) = new.guests {
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
            return Err(AppError::BadRequest(format!(
                "guests must be between {MIN_GUESTS} and {MAX_GUESTS}"
            )));
        }
    }

    let db = state.db()?;

    let confirmation = match new.confirmation.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => {
            if queries::confirmation_exists(&db, code)? {
                return Err(AppError::BadRequest(format!(
                    "confirmation {code} already exists"
                )));
            }
            code.to_string()
        }
        _ => unused_confirmation(&db, &state.config.confirmation_prefix)?,
    };

    let reservation = queries::insert_reservation(
        &db,
        &ReservationInsert {
            confirmation: &confirmation,
            name: new.name.as_deref(),
            date: new.date.as_deref(),
            time: new.time.as_deref(),
            guests: new.guests,
            phone: new.phone.as_deref(),
            special_requests: new.special_requests.as_deref(),
            transcript: new.transcript.as_deref(),
            extra: &new.extra,
        },
    )?;

    tracing::info!(
        confirmation = %reservation.confirmation,
        id = reservation.id,
        "reservation saved"
    );

    Ok(reservation)
}

fn unused_confirmation(db: &rusqlite::Connection, prefix: &str) -> Result<String, AppError> {
    for _ in 0..CODE_ATTEMPTS {
        let code = generate_confirmation(prefix);
        if !queries::confirmation_exists(db, &code)? {
            return Ok(code);
        }
    }
    Err(AppError::Storage(anyhow::anyhow!(
        "could not allocate a unique confirmation code"
    )))
}

pub fn list_reservations(state: &AppState) -> Result<Vec<Reservation>, AppError> {
    let db = state.db()?;
    let reservations = queries::list_reservations(&db)?;
    tracing::info!(count = reservations.len(), "retrieved reservations");
    Ok(reservations)
}

pub fn get_reservation(state: &AppState, confirmation: &str) -> Result<Reservation, AppError> {
    let db = state.db()?;
    queries::get_reservation_by_confirmation(&db, confirmation)?
        .ok_or_else(|| AppError::NotFound(format!("reservation {confirmation}")))
}

pub fn cancel_reservation(state: &AppState, confirmation: &str) -> Result<(), AppError> {
    let db = state.db()?;
    if !queries::delete_reservation_by_confirmation(&db, confirmation)? {
        return Err(AppError::NotFound(format!("reservation {confirmation}")));
    }
    tracing::info!(confirmation, "reservation cancelled");
    Ok(())
}
