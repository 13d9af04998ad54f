use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by the server's API handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// No marketplace backend is configured for an upstream-backed route.
    #[error("no upstream configured")]
    NoUpstream,

    /// The marketplace backend call failed.
    #[error("upstream error: {0}")]
    Upstream(#[from] portico_client::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NoUpstream => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        warn!(error = %self, "request failed");
        (status, axum::Json(json!({ "error": self.to_string() }))).into_response()
    }
}
