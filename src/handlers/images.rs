use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::services::ergast::DEFAULT_SEASON;
use crate::utils::media::{driver_placeholder_url, team_logo_url};
use crate::utils::state::AppState;

#[derive(Deserialize)]
pub struct DriverImageQuery {
    code: Option<String>,
    number: Option<String>,
    family_name: Option<String>,
}

pub async fn driver_image(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DriverImageQuery>,
) -> impl IntoResponse {
    let url = state
        .driver_images
        .resolve(params.code.as_deref(), params.number.as_deref())
        .await;
    let placeholder = driver_placeholder_url(params.code.as_deref(), params.family_name.as_deref());

    (StatusCode::OK, Json(json!({"url": url, "placeholder": placeholder})))
}

#[derive(Deserialize)]
pub struct TeamImageQuery {
    season: Option<String>,
}

pub async fn team_image(
    Path(constructor_id): Path<String>,
    Query(params): Query<TeamImageQuery>,
) -> impl IntoResponse {
    let season = params.season.unwrap_or_else(|| DEFAULT_SEASON.to_string());

    (
        StatusCode::OK,
        Json(json!({"url": team_logo_url(&constructor_id, &season)})),
    )
}
