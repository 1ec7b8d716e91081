use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use medibook::catalog::Catalog;
use medibook::config::AppConfig;
use medibook::handlers;
use medibook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let catalog = Catalog::load(&config.catalog_path)?;
    tracing::info!("loaded {} doctors from {}", catalog.len(), config.catalog_path);

    let state = Arc::new(AppState { catalog });

    let app = Router::new()
        .route("/doctors", get(handlers::doctors::list_doctors))
        .route("/appointments", post(handlers::appointments::submit_booking))
        .route("/health", get(handlers::health::health))
        .route("/", get(handlers::app::app_page))
        .route("/doctor/:id", get(handlers::app::app_page))
        .fallback(handlers::app::app_page)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
