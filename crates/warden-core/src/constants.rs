/// Warden system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema tag written into every audit record.
pub const SCHEMA_VERSION: &str = "v1";

/// Confidence is never allowed to express full certainty.
pub const CONFIDENCE_CEILING: f64 = 0.9;

/// Cap applied when the evidence rests on a single document.
pub const SINGLE_SOURCE_CONFIDENCE_CAP: f64 = 0.6;

/// Name of the env var consulted for the log filter.
pub const LOG_ENV_VAR: &str = "WARDEN_LOG";
