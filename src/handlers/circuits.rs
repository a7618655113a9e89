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

pub async fn list_circuits(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let circuits = state.ergast.circuits(&season).await?;
    Ok((StatusCode::OK, Json(circuits)))
}

pub async fn circuit_details(
    State(state): State<Arc<AppState>>,
    Path((season, circuit_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    match state.ergast.circuit_details(&season, &circuit_id).await? {
        Some(circuit) => Ok((StatusCode::OK, Json(circuit)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("no circuit {circuit_id} in season {season}")})),
        )
            .into_response()),
    }
}
