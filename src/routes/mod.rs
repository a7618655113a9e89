pub mod circuits;
pub mod constructors;
pub mod drivers;
pub mod images;
pub mod races;
pub mod standings;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::StatusCode;
use serde_json::json;
use std::{error::Error, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::seasons::list_seasons,
    routes::{
        circuits::circuit_routes, constructors::constructor_routes, drivers::driver_routes,
        images::image_routes, races::race_routes, standings::standings_routes,
    },
    utils::{config::Config, state::AppState},
};

pub async fn make_app() -> Result<Router, Box<dyn Error>> {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();

    info!("Configuration loaded successfully");
    let http_client = reqwest::Client::new();
    info!("External clients initialized successfully");

    let state = Arc::new(AppState::from_config(config, http_client));

    let app = build_router(state);
    info!("Application initialized successfully");

    Ok(app)
}

/// Routing over an already-built state. `make_app` wraps this; tests
/// call it directly with mock-backed state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/seasons", get(list_seasons))
        .nest("/drivers", driver_routes())
        .nest("/constructors", constructor_routes())
        .nest("/standings", standings_routes())
        .nest("/circuits", circuit_routes())
        .nest("/races", race_routes())
        .nest("/images", image_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    return (StatusCode::OK, Json(json!({"status": "ok"}))).into_response();
}
