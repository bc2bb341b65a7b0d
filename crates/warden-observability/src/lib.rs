//! # warden-observability
//!
//! Structured tracing with per-request spans, lock-free decision counters,
//! and degradation event tracking.

pub mod degradation;
pub mod metrics;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use metrics::{DecisionMetrics, MetricsSnapshot};
pub use tracing_setup::init_tracing;
