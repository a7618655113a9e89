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

pub async fn list_constructors(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let constructors = state.ergast.constructors(&season).await?;
    Ok((StatusCode::OK, Json(constructors)))
}

pub async fn constructor_details(
    State(state): State<Arc<AppState>>,
    Path((season, constructor_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    match state.ergast.constructor_details(&season, &constructor_id).await? {
        Some(details) => Ok((StatusCode::OK, Json(details)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("no constructor {constructor_id} in season {season}")})),
        )
            .into_response()),
    }
}
