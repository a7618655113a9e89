use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;

use crate::models::error::ApiError;
use crate::services::ergast::DEFAULT_SEASON;
use crate::utils::state::AppState;

pub async fn driver_standings(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let standings = state.ergast.driver_standings(&season).await?;
    Ok((StatusCode::OK, Json(standings)))
}

pub async fn constructor_standings(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let standings = state.ergast.constructor_standings(&season).await?;
    Ok((StatusCode::OK, Json(standings)))
}
