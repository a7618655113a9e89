use axum::{response::IntoResponse, Json};
use http::StatusCode;

use crate::services::ergast::available_seasons;

pub async fn list_seasons() -> impl IntoResponse {
    (StatusCode::OK, Json(available_seasons()))
}
