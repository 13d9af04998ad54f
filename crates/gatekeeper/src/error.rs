use thiserror::Error;

/// Errors that can occur while constructing a gatekeeper.
///
/// Evaluation itself has no error variant: a decision is always produced.
#[derive(Debug, Error)]
pub enum GatekeeperError {
    /// The gatekeeper was misconfigured (e.g. a relative allowlist entry,
    /// or a landing route its own allowlist would gate).
    #[error("configuration error: {0}")]
    Configuration(String),
}
