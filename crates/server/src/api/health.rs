use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use super::AppState;

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Gate decision counters.
pub async fn metrics(State(state): State<AppState>) -> Json<Value> {
    let snap = state.gatekeeper.metrics().snapshot();
    Json(json!({
        "evaluated": snap.evaluated,
        "passed_public": snap.passed_public,
        "passed_private": snap.passed_private,
        "redirected": snap.redirected,
        "mismatches": snap.mismatches,
    }))
}
