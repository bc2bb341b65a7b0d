use serde::{Deserialize, Serialize};

use super::defaults;

/// Audit sink configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Sink backend: "jsonl", "sqlite", "memory".
    pub backend: String,
    /// Target file for the on-disk backends.
    pub path: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_AUDIT_BACKEND.to_string(),
            path: defaults::DEFAULT_AUDIT_PATH.to_string(),
        }
    }
}
