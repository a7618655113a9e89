use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::models::error::ApiError;
use crate::services::ergast::DEFAULT_SEASON;
use crate::utils::state::AppState;

pub async fn list_drivers(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let drivers = state.ergast.drivers(&season).await?;
    Ok((StatusCode::OK, Json(drivers)))
}

pub async fn driver_details(
    State(state): State<Arc<AppState>>,
    Path((season, driver_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    match state.ergast.driver_details(&season, &driver_id).await? {
        Some(details) => Ok((StatusCode::OK, Json(details)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("no driver {driver_id} in season {season}")})),
        )
            .into_response()),
    }
}
