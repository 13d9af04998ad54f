use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters tracking gate decisions.
///
/// All counters use relaxed ordering for maximum throughput. For a
/// consistent point-in-time view, call [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct GateMetrics {
    /// Requests evaluated (exempt paths excluded).
    pub evaluated: AtomicU64,
    /// Requests passed on a public path.
    pub passed_public: AtomicU64,
    /// Requests passed on a private path with the credential cookie.
    pub passed_private: AtomicU64,
    /// Requests redirected to the landing route.
    pub redirected: AtomicU64,
    /// Identity signal mismatches detected.
    pub mismatches: AtomicU64,
}

impl GateMetrics {
    /// Increment the evaluated counter.
    pub fn increment_evaluated(&self) {
        self.evaluated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the public pass counter.
    pub fn increment_passed_public(&self) {
        self.passed_public.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the private pass counter.
    pub fn increment_passed_private(&self) {
        self.passed_private.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the redirect counter.
    pub fn increment_redirected(&self) {
        self.redirected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the mismatch counter.
    pub fn increment_mismatches(&self) {
        self.mismatches.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a consistent point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            evaluated: self.evaluated.load(Ordering::Relaxed),
            passed_public: self.passed_public.load(Ordering::Relaxed),
            passed_private: self.passed_private.load(Ordering::Relaxed),
            redirected: self.redirected.load(Ordering::Relaxed),
            mismatches: self.mismatches.load(Ordering::Relaxed),
        }
    }
}

/// A plain data snapshot of [`GateMetrics`] at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Requests evaluated.
    pub evaluated: u64,
    /// Requests passed on a public path.
    pub passed_public: u64,
    /// Requests passed on a private path.
    pub passed_private: u64,
    /// Requests redirected.
    pub redirected: u64,
    /// Identity mismatches detected.
    pub mismatches: u64,
}
