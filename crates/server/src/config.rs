use serde::Deserialize;

/// Top-level configuration for the Portico server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct PorticoConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Gatekeeping policy configuration.
    #[serde(default)]
    pub gate: GateConfig,
    /// Marketplace backend configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

/// HTTP server bind configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
    8080
}

/// Gatekeeping policy configuration.
///
/// Every field defaults to the marketplace's stock policy, so an empty
/// `[gate]` section (or none at all) yields a working gate.
#[derive(Debug, Deserialize)]
pub struct GateConfig {
    /// Public path prefixes, evaluated in order, first match wins.
    #[serde(default = "default_allowlist")]
    pub allowlist: Vec<String>,
    /// Path prefixes the gate is never invoked for (build assets, favicon).
    #[serde(default = "default_exempt")]
    pub exempt: Vec<String>,
    /// Redirect target for unauthenticated private requests.
    #[serde(default = "default_landing_route")]
    pub landing_route: String,
    /// Credential cookie name.
    #[serde(default = "default_auth_cookie")]
    pub auth_cookie: String,
    /// Identity cookie name.
    #[serde(default = "default_uid_cookie")]
    pub uid_cookie: String,
    /// Identity header name.
    #[serde(default = "default_user_id_header")]
    pub user_id_header: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            allowlist: default_allowlist(),
            exempt: default_exempt(),
            landing_route: default_landing_route(),
            auth_cookie: default_auth_cookie(),
            uid_cookie: default_uid_cookie(),
            user_id_header: default_user_id_header(),
        }
    }
}

fn default_allowlist() -> Vec<String> {
    portico_core::Allowlist::default()
        .prefixes()
        .to_vec()
}

fn default_exempt() -> Vec<String> {
    vec!["/_build/".to_owned(), "/favicon.ico".to_owned()]
}

fn default_landing_route() -> String {
    "/auth/homepublic".to_owned()
}

fn default_auth_cookie() -> String {
    "dev_auth".to_owned()
}

fn default_uid_cookie() -> String {
    "uid".to_owned()
}

fn default_user_id_header() -> String {
    "x-user-id".to_owned()
}

/// Configuration for the marketplace backend the edge proxies to.
#[derive(Debug, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the backend (e.g. `http://localhost:9090`). When unset,
    /// upstream-backed endpoints answer 503.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_upstream_timeout")]
    pub timeout_seconds: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_seconds: default_upstream_timeout(),
        }
    }
}

fn default_upstream_timeout() -> u64 {
    30
}
