use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    handlers::images::{driver_image, team_image},
    utils::state::AppState,
};

pub fn image_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/drivers", get(driver_image))
        .route("/teams/{constructor_id}", get(team_image))
}
