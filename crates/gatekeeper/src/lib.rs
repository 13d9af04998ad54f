pub mod builder;
pub mod cookies;
pub mod error;
pub mod layer;
pub mod metrics;
pub mod policy;

pub use builder::GatekeeperBuilder;
pub use error::GatekeeperError;
pub use layer::{GateLayer, GateMiddleware};
pub use metrics::{GateMetrics, MetricsSnapshot};
pub use policy::{GateDecision, Gatekeeper};
