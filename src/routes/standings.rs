use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::standings::{constructor_standings, driver_standings},
    utils::state::AppState,
};

pub fn standings_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/driver_standings", get(driver_standings))
        .route("/driver_standings/{season}", get(driver_standings))
        .route("/constructor_standings", get(constructor_standings))
        .route("/constructor_standings/{season}", get(constructor_standings))
}
