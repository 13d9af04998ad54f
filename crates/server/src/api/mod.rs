pub mod health;
pub mod pages;
pub mod publications;
pub mod session;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use portico_client::ClientManager;
use portico_gatekeeper::{GateLayer, Gatekeeper};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The gate policy (also the source of the metrics snapshot).
    pub gatekeeper: Arc<Gatekeeper>,
    /// Backend client manager; `None` when no upstream is configured.
    pub clients: Option<Arc<ClientManager>>,
}

/// Build the axum router with the gate layer in front of all routes.
pub fn router(state: AppState) -> Router {
    let gate = GateLayer::new(Arc::clone(&state.gatekeeper));

    Router::new()
        // Health & metrics
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        // Public landing page
        .route("/auth/homepublic", get(pages::homepublic))
        // Caller identity
        .route("/v1/session", get(session::session))
        // Marketplace listings (proxied upstream)
        .route("/v1/publications", get(publications::list))
        .with_state(state)
        .layer(gate)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
