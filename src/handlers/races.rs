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

pub async fn list_races(
    State(state): State<Arc<AppState>>,
    season: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let season = season.map_or_else(|| DEFAULT_SEASON.to_string(), |Path(season)| season);
    let races = state.ergast.race_schedule(&season).await?;
    Ok((StatusCode::OK, Json(races)))
}
