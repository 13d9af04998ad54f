pub mod principal;
pub mod resolve;
pub mod routes;

pub use principal::{Principal, SignalSource};
pub use resolve::{Mismatch, Resolution, parse_actor_id, resolve_actor};
pub use routes::{Allowlist, Exemptions, RouteClass};
