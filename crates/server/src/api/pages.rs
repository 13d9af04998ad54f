use axum::Json;
use serde_json::{Value, json};

/// The public landing route unauthenticated callers are redirected to.
///
/// Page rendering lives in the excluded frontend; the edge serves a small
/// JSON placeholder so redirects resolve to a real route.
pub async fn homepublic() -> Json<Value> {
    Json(json!({
        "page": "homepublic",
        "message": "browse publications or sign in to apply",
    }))
}
