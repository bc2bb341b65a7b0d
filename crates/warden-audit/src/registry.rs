use std::sync::Arc;

use tracing::info;
use warden_core::config::AuditConfig;
use warden_core::errors::{ConfigError, WardenResult};
use warden_core::traits::IAuditSink;

use crate::{JsonlAuditSink, MemoryAuditSink, SqliteAuditSink};

/// Names accepted in `audit.backend`.
pub const SINK_NAMES: [&str; 3] = ["jsonl", "sqlite", "memory"];

/// Open the sink named by `config.backend`.
pub fn create_sink(config: &AuditConfig) -> WardenResult<Arc<dyn IAuditSink>> {
    let sink: Arc<dyn IAuditSink> = match config.backend.as_str() {
        "jsonl" => Arc::new(JsonlAuditSink::open(&config.path)?),
        "sqlite" => Arc::new(SqliteAuditSink::open(&config.path)?),
        "memory" => Arc::new(MemoryAuditSink::new()),
        other => {
            return Err(ConfigError::UnknownBackend {
                kind: "audit".to_string(),
                name: other.to_string(),
            }
            .into())
        }
    };
    info!(backend = sink.name(), path = %config.path, "audit sink ready");
    Ok(sink)
}
