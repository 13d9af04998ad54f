use serde::{Deserialize, Serialize};

/// Which identity signal supplied the effective actor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalSource {
    /// The `uid` cookie won.
    Cookie,
    /// The `x-user-id` header won.
    Header,
    /// Neither signal carried a usable id.
    None,
}

impl std::fmt::Display for SignalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cookie => f.write_str("cookie"),
            Self::Header => f.write_str("header"),
            Self::None => f.write_str("none"),
        }
    }
}

/// The resolved caller identity for one request.
///
/// Constructed exactly once at the request boundary by the gatekeeper and
/// passed to downstream handlers, so they never re-read raw cookies or
/// headers themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Effective actor id; `0` means anonymous/unresolved.
    pub actor_id: u64,
    /// Which signal supplied the id.
    pub source: SignalSource,
}

impl Principal {
    /// An anonymous principal (actor id 0, no winning source).
    pub fn anonymous() -> Self {
        Self {
            actor_id: 0,
            source: SignalSource::None,
        }
    }

    /// Whether this principal carries no known actor.
    pub fn is_anonymous(&self) -> bool {
        self.actor_id == 0
    }
}

impl Default for Principal {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_zero_id_and_no_source() {
        let p = Principal::anonymous();
        assert_eq!(p.actor_id, 0);
        assert_eq!(p.source, SignalSource::None);
        assert!(p.is_anonymous());
    }

    #[test]
    fn source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SignalSource::Cookie).unwrap(),
            "\"cookie\""
        );
        assert_eq!(
            serde_json::to_string(&SignalSource::Header).unwrap(),
            "\"header\""
        );
        assert_eq!(
            serde_json::to_string(&SignalSource::None).unwrap(),
            "\"none\""
        );
    }

    #[test]
    fn principal_round_trips_through_json() {
        let p = Principal {
            actor_id: 7,
            source: SignalSource::Cookie,
        };
        let json = serde_json::to_string(&p).unwrap();
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
