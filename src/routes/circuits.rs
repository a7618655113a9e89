use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::circuits::{circuit_details, list_circuits},
    utils::state::AppState,
};

pub fn circuit_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_circuits))
        .route("/{season}", get(list_circuits))
        .route("/{season}/{circuit_id}", get(circuit_details))
}
