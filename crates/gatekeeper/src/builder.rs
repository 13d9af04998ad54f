use std::sync::Arc;

use portico_core::{Allowlist, Exemptions, RouteClass};

use crate::error::GatekeeperError;
use crate::metrics::GateMetrics;
use crate::policy::Gatekeeper;

/// Fluent builder for constructing a [`Gatekeeper`].
///
/// Every field has a default matching the marketplace's stock policy
/// (allowlist of auth entry pages and static assets, `dev_auth` / `uid`
/// cookies, `x-user-id` header, `/auth/homepublic` landing route), so
/// `GatekeeperBuilder::new().build()` already yields a working gate.
pub struct GatekeeperBuilder {
    allowlist: Allowlist,
    exemptions: Exemptions,
    landing_route: String,
    auth_cookie: String,
    uid_cookie: String,
    user_id_header: String,
}

impl GatekeeperBuilder {
    /// Create a new builder with the stock policy defaults.
    pub fn new() -> Self {
        Self {
            allowlist: Allowlist::default(),
            exemptions: Exemptions::default(),
            landing_route: "/auth/homepublic".to_owned(),
            auth_cookie: "dev_auth".to_owned(),
            uid_cookie: "uid".to_owned(),
            user_id_header: "x-user-id".to_owned(),
        }
    }

    /// Replace the public-path allowlist.
    #[must_use]
    pub fn allowlist(mut self, allowlist: Allowlist) -> Self {
        self.allowlist = allowlist;
        self
    }

    /// Replace the exemption set (paths the gate never sees).
    #[must_use]
    pub fn exemptions(mut self, exemptions: Exemptions) -> Self {
        self.exemptions = exemptions;
        self
    }

    /// Set the redirect target for unauthenticated private requests.
    #[must_use]
    pub fn landing_route(mut self, route: impl Into<String>) -> Self {
        self.landing_route = route.into();
        self
    }

    /// Set the credential cookie name.
    #[must_use]
    pub fn auth_cookie(mut self, name: impl Into<String>) -> Self {
        self.auth_cookie = name.into();
        self
    }

    /// Set the identity cookie name.
    #[must_use]
    pub fn uid_cookie(mut self, name: impl Into<String>) -> Self {
        self.uid_cookie = name.into();
        self
    }

    /// Set the identity header name.
    #[must_use]
    pub fn user_id_header(mut self, name: impl Into<String>) -> Self {
        self.user_id_header = name.into();
        self
    }

    /// Consume the builder and produce a configured [`Gatekeeper`].
    ///
    /// Returns a [`GatekeeperError::Configuration`] if an allowlist entry
    /// is not an absolute path, or if the landing route would itself be
    /// gated (which would redirect unauthenticated callers in a loop).
    pub fn build(self) -> Result<Gatekeeper, GatekeeperError> {
        for prefix in self.allowlist.prefixes() {
            if !prefix.starts_with('/') {
                return Err(GatekeeperError::Configuration(format!(
                    "allowlist entry '{prefix}' must be an absolute path"
                )));
            }
        }

        if self.allowlist.classify(&self.landing_route) != RouteClass::Public {
            return Err(GatekeeperError::Configuration(format!(
                "landing route '{}' is not covered by the allowlist",
                self.landing_route
            )));
        }

        Ok(Gatekeeper {
            allowlist: self.allowlist,
            exemptions: self.exemptions,
            landing_route: self.landing_route,
            auth_cookie: self.auth_cookie,
            uid_cookie: self.uid_cookie,
            user_id_header: self.user_id_header,
            metrics: Arc::new(GateMetrics::default()),
        })
    }
}

impl Default for GatekeeperBuilder {
    fn default() -> Self {
        Self::new()
    }
}
