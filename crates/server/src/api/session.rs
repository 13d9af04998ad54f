use axum::Extension;
use axum::Json;

use portico_core::Principal;

/// Return the caller's resolved identity.
///
/// The principal is constructed once by the gate middleware; handlers
/// never re-read cookies or headers for identity.
pub async fn session(Extension(principal): Extension<Principal>) -> Json<Principal> {
    Json(principal)
}
