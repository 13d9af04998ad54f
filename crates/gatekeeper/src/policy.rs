use std::sync::Arc;

use axum::http::HeaderMap;
use tracing::{info, warn};

use portico_core::{Allowlist, Exemptions, Principal, RouteClass, resolve_actor};

use crate::cookies::cookie_value;
use crate::metrics::GateMetrics;

/// The decision the gatekeeper produces for one request.
///
/// There is no error variant: every request yields exactly one of these,
/// synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The path is exempt from gatekeeping (build assets, favicon).
    Exempt,
    /// The path is public; pass through without identity work.
    PassPublic,
    /// The path is private and the credential cookie is present; pass
    /// through carrying the resolved principal.
    PassPrivate {
        /// The resolved caller identity.
        principal: Principal,
    },
    /// The path is private and the credential cookie is absent; redirect
    /// to the landing route. This is a normal response, not a fault.
    Redirect {
        /// Redirect target (the public landing route).
        location: String,
    },
}

/// Classifies each inbound request and enforces the allow/redirect policy
/// before any handler runs.
///
/// Holds only fixed, read-only configuration, so concurrent evaluations
/// are independent: each decision is a pure function of the request's
/// path, cookies, and headers (plus the decision log lines and metric
/// increments it emits).
#[derive(Debug)]
pub struct Gatekeeper {
    pub(crate) allowlist: Allowlist,
    pub(crate) exemptions: Exemptions,
    pub(crate) landing_route: String,
    pub(crate) auth_cookie: String,
    pub(crate) uid_cookie: String,
    pub(crate) user_id_header: String,
    pub(crate) metrics: Arc<GateMetrics>,
}

/// Credential cookie value that counts as present.
const AUTH_COOKIE_SET: &str = "1";

impl Gatekeeper {
    /// Evaluate one request.
    ///
    /// Never fails and never panics; malformed identity values degrade to
    /// the anonymous principal. Emits one diagnostic line per decision
    /// and a warning when the two identity signals disagree.
    pub fn evaluate(&self, path: &str, headers: &HeaderMap) -> GateDecision {
        if self.exemptions.is_exempt(path) {
            return GateDecision::Exempt;
        }
        self.metrics.increment_evaluated();

        if self.allowlist.classify(path) == RouteClass::Public {
            self.metrics.increment_passed_public();
            info!(path, "public path, passing through");
            return GateDecision::PassPublic;
        }

        if cookie_value(headers, &self.auth_cookie) != Some(AUTH_COOKIE_SET) {
            self.metrics.increment_redirected();
            info!(path, location = %self.landing_route, "unauthenticated, redirecting");
            return GateDecision::Redirect {
                location: self.landing_route.clone(),
            };
        }

        let uid = cookie_value(headers, &self.uid_cookie);
        let header_id = headers
            .get(self.user_id_header.as_str())
            .and_then(|v| v.to_str().ok());

        let resolution = resolve_actor(uid, header_id);
        if let Some(mismatch) = resolution.mismatch {
            self.metrics.increment_mismatches();
            warn!(
                path,
                cookie = mismatch.cookie,
                header = mismatch.header,
                "identity signals disagree, preferring cookie"
            );
        }

        let principal = resolution.principal;
        self.metrics.increment_passed_private();
        info!(
            path,
            actor_id = principal.actor_id,
            source = %principal.source,
            "authorized, passing through"
        );
        GateDecision::PassPrivate { principal }
    }

    /// The configured landing route for unauthenticated redirects.
    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    /// The gate's decision counters.
    pub fn metrics(&self) -> &Arc<GateMetrics> {
        &self.metrics
    }
}
