use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::constructors::{constructor_details, list_constructors},
    utils::state::AppState,
};

pub fn constructor_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_constructors))
        .route("/{season}", get(list_constructors))
        .route("/{season}/{constructor_id}", get(constructor_details))
}
