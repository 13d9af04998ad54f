//! Lifecycle management for the shared backend client.
//!
//! The marketplace frontend historically kept one module-level client with
//! an identity header baked in at import time. [`ClientManager`] replaces
//! that ambient singleton with an injected value: the client is created on
//! first use, reused while the caller identity is unchanged, and dropped
//! and rebuilt when the identity changes.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use portico_core::Principal;

use crate::{Error, MarketClient, MarketClientBuilder};

/// Process-wide manager for the backend client.
///
/// Cheap to share behind an `Arc`; the internal lock is only held while
/// swapping the cached client, never across I/O (callers receive an owned
/// [`MarketClient`] clone).
#[derive(Debug)]
pub struct ClientManager {
    base_url: String,
    timeout: Duration,
    cached: Mutex<Option<MarketClient>>,
}

impl ClientManager {
    /// Create a manager for the given backend base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            cached: Mutex::new(None),
        }
    }

    /// Get a client acting as the given principal.
    ///
    /// Reuses the cached client when the actor id matches; otherwise the
    /// old client is disposed and a fresh one is built for the new
    /// identity.
    pub fn client_for(&self, principal: Principal) -> Result<MarketClient, Error> {
        let mut cached = self.cached.lock();

        if let Some(client) = cached.as_ref()
            && client.principal().actor_id == principal.actor_id
        {
            return Ok(client.clone());
        }

        debug!(
            actor_id = principal.actor_id,
            "building backend client for new identity"
        );
        let client = MarketClientBuilder::new(self.base_url.as_str())
            .timeout(self.timeout)
            .principal(principal)
            .build()?;
        *cached = Some(client.clone());
        Ok(client)
    }

    /// Drop the cached client, forcing a rebuild on next use.
    pub fn reset(&self) {
        *self.cached.lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portico_core::SignalSource;

    fn principal(actor_id: u64) -> Principal {
        Principal {
            actor_id,
            source: SignalSource::Cookie,
        }
    }

    fn manager() -> ClientManager {
        ClientManager::new("http://localhost:9090", Duration::from_secs(5))
    }

    #[test]
    fn creates_client_on_first_use() {
        let m = manager();
        let client = m.client_for(principal(7)).unwrap();
        assert_eq!(client.principal().actor_id, 7);
    }

    #[test]
    fn reuses_client_while_identity_unchanged() {
        let m = manager();
        m.client_for(principal(7)).unwrap();
        {
            let cached = m.cached.lock();
            assert!(cached.is_some());
        }
        let again = m.client_for(principal(7)).unwrap();
        assert_eq!(again.principal().actor_id, 7);
    }

    #[test]
    fn rebuilds_client_on_identity_change() {
        let m = manager();
        let first = m.client_for(principal(7)).unwrap();
        let second = m.client_for(principal(9)).unwrap();
        assert_eq!(first.principal().actor_id, 7);
        assert_eq!(second.principal().actor_id, 9);

        // The cache now holds the new identity.
        let cached = m.cached.lock().as_ref().unwrap().principal();
        assert_eq!(cached.actor_id, 9);
    }

    #[test]
    fn anonymous_callers_share_a_client() {
        let m = manager();
        let a = m.client_for(Principal::anonymous()).unwrap();
        let b = m.client_for(Principal::anonymous()).unwrap();
        assert!(a.principal().is_anonymous());
        assert!(b.principal().is_anonymous());
    }

    #[test]
    fn reset_forces_rebuild() {
        let m = manager();
        m.client_for(principal(7)).unwrap();
        m.reset();
        assert!(m.cached.lock().is_none());
    }
}
