use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{handlers::races::list_races, utils::state::AppState};

pub fn race_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_races))
        .route("/{season}", get(list_races))
}
