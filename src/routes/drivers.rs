use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::drivers::{driver_details, list_drivers},
    utils::state::AppState,
};

pub fn driver_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_drivers))
        .route("/{season}", get(list_drivers))
        .route("/{season}/{driver_id}", get(driver_details))
}
