//! Path classification against the public allowlist.

/// Whether a request path requires the credential cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without credentials.
    Public,
    /// Gated on the credential cookie.
    Private,
}

/// The fixed set of path prefixes reachable without the credential cookie.
///
/// Matching is a plain string-prefix check, evaluated in list order with
/// the first match winning, case-sensitive. Trailing content after a
/// matching prefix is irrelevant (`/auth/login/extra` is public).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allowlist {
    prefixes: Vec<String>,
}

impl Allowlist {
    /// Build an allowlist from path prefixes.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Classify a path against the allowlist.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            RouteClass::Public
        } else {
            RouteClass::Private
        }
    }

    /// The configured prefixes, in evaluation order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}

impl Default for Allowlist {
    /// The marketplace's stock allowlist: auth entry pages, password
    /// reset, and static assets.
    fn default() -> Self {
        Self::new(
            [
                "/auth/homepublic",
                "/auth/login",
                "/auth/register",
                "/reset",
                "/assets/",
                "/static/",
            ]
            .map(str::to_owned)
            .to_vec(),
        )
    }
}

/// Paths the gatekeeper is never invoked for at all.
///
/// Expressed as an exclusion rule rather than allowlist entries: these
/// are build-internal static assets and the favicon, which skip both
/// classification and identity resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exemptions {
    prefixes: Vec<String>,
}

impl Exemptions {
    /// Build an exemption set from path prefixes. An exact path like
    /// `/favicon.ico` is simply a prefix nothing else starts with.
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    /// Whether the gatekeeper should skip this path entirely.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }
}

impl Default for Exemptions {
    fn default() -> Self {
        Self::new(["/_build/", "/favicon.ico"].map(str::to_owned).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowlisted_prefixes_are_public() {
        let list = Allowlist::default();
        assert_eq!(list.classify("/auth/homepublic"), RouteClass::Public);
        assert_eq!(list.classify("/auth/login"), RouteClass::Public);
        assert_eq!(list.classify("/auth/register"), RouteClass::Public);
        assert_eq!(list.classify("/reset"), RouteClass::Public);
        assert_eq!(list.classify("/assets/logo.png"), RouteClass::Public);
    }

    #[test]
    fn trailing_content_after_match_is_irrelevant() {
        let list = Allowlist::default();
        assert_eq!(list.classify("/auth/login?next=/jobs"), RouteClass::Public);
        assert_eq!(list.classify("/reset/token/abc"), RouteClass::Public);
    }

    #[test]
    fn unlisted_paths_are_private() {
        let list = Allowlist::default();
        assert_eq!(list.classify("/"), RouteClass::Private);
        assert_eq!(list.classify("/publications"), RouteClass::Private);
        assert_eq!(list.classify("/v1/postulations"), RouteClass::Private);
        assert_eq!(list.classify("/auth"), RouteClass::Private);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let list = Allowlist::default();
        assert_eq!(list.classify("/Auth/login"), RouteClass::Private);
    }

    #[test]
    fn default_exemptions_cover_build_assets_and_favicon() {
        let ex = Exemptions::default();
        assert!(ex.is_exempt("/_build/chunk-abc123.js"));
        assert!(ex.is_exempt("/favicon.ico"));
        assert!(!ex.is_exempt("/publications"));
        assert!(!ex.is_exempt("/auth/login"));
    }
}
