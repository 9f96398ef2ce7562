use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/reservations/health",
            get(handlers::health::store_health),
        )
        .route(
            "/api/reservations",
            post(handlers::reservations::create_reservation)
                .get(handlers::reservations::list_reservations),
        )
        .route(
            "/api/reservations/:confirmation",
            get(handlers::reservations::get_reservation)
                .delete(handlers::reservations::cancel_reservation),
        )
        .route("/api/extract", post(handlers::extract::extract))
        .route("/api/ai/complete", post(handlers::ai::complete))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
