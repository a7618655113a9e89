use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Failures talking to the upstream data providers. Every variant maps
/// to 502 at the HTTP boundary; "entity not found" is not an error and
/// is modelled as `Ok(None)` by the client instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status} for {url}")]
    UpstreamStatus { status: StatusCode, url: String },
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("{self}");
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
