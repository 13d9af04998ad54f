//! Two-signal actor resolution.
//!
//! A request can carry its caller's id in two independent, untrusted
//! places: the `uid` cookie and the `x-user-id` header. Resolution
//! collapses them into a single [`Principal`], preferring the cookie,
//! falling back to the header, and degrading to anonymous. It is a pure
//! function over its two inputs and never rejects a request.

use crate::principal::{Principal, SignalSource};

/// Both signals were non-zero and disagreed.
///
/// Detection-only: the resolution still succeeds with the cookie value.
/// The caller is expected to log this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Actor id carried by the cookie.
    pub cookie: u64,
    /// Actor id carried by the header.
    pub header: u64,
}

/// The outcome of resolving one (cookie, header) signal pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The effective principal.
    pub principal: Principal,
    /// Present when both signals were non-zero and unequal.
    pub mismatch: Option<Mismatch>,
}

/// Parse a raw signal value as a non-negative actor id.
///
/// Missing, empty, or non-numeric values resolve to `0` ("not provided"),
/// as does an explicit `"0"`. Surrounding whitespace is tolerated.
pub fn parse_actor_id(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(0)
}

/// Resolve the effective actor from the two identity signals.
///
/// Total over its inputs: unparseable values count as absent, and the
/// worst case is an anonymous principal. Identical inputs always yield
/// the same principal and source attribution.
pub fn resolve_actor(cookie: Option<&str>, header: Option<&str>) -> Resolution {
    let cookie_id = parse_actor_id(cookie);
    let header_id = parse_actor_id(header);

    let mismatch = (cookie_id != 0 && header_id != 0 && cookie_id != header_id).then_some(
        Mismatch {
            cookie: cookie_id,
            header: header_id,
        },
    );

    let principal = if cookie_id != 0 {
        Principal {
            actor_id: cookie_id,
            source: SignalSource::Cookie,
        }
    } else if header_id != 0 {
        Principal {
            actor_id: header_id,
            source: SignalSource::Header,
        }
    } else {
        Principal::anonymous()
    };

    Resolution {
        principal,
        mismatch,
    }
}
