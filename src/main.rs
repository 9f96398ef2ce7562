use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use mml_reservations::config::AppConfig;
use mml_reservations::db;
use mml_reservations::routes;
use mml_reservations::services::ai;
use mml_reservations::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let completion = ai::provider_from_config(&config)?;
    match &completion {
        Some(provider) => tracing::info!("using {} completion provider", provider.name()),
        None => tracing::info!("no completion provider configured"),
    }

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        completion,
    });

    let app = routes::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        restaurant = %config.restaurant_name,
        database = %config.database_url,
        "starting server on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
