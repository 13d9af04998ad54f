use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use portico_core::Principal;

use crate::error::ServerError;

use super::AppState;

/// `GET /v1/publications` -- list publications, proxied to the marketplace
/// backend on behalf of the caller.
///
/// The backend client carries the caller's identity header; the manager
/// reuses it across requests until the identity changes. Answers 503 when
/// no upstream is configured and 502 when the upstream call fails.
pub async fn list(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<impl IntoResponse, ServerError> {
    let clients = state.clients.ok_or(ServerError::NoUpstream)?;
    let client = clients.client_for(principal)?;
    let publications = client.list_publications().await?;
    Ok(Json(publications))
}
