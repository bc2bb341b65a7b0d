//! # warden-audit
//!
//! The audit trail is the compliance artifact of every decision. Each sink
//! serializes its writers so a record lands whole or not at all, and
//! `append` returns only once the record has been handed to durable storage.

pub mod jsonl;
pub mod memory;
pub mod reader;
pub mod registry;
pub mod sqlite;

pub use jsonl::JsonlAuditSink;
pub use memory::MemoryAuditSink;
pub use reader::read_records;
pub use registry::{create_sink, SINK_NAMES};
pub use sqlite::SqliteAuditSink;

use warden_core::errors::AuditError;
use warden_core::models::AuditRecord;

/// One record as a JSON line, newline included.
pub(crate) fn encode_line(record: &AuditRecord) -> Result<String, AuditError> {
    let mut line = record
        .to_json_line()
        .map_err(|e| AuditError::Serialization {
            reason: e.to_string(),
        })?;
    line.push('\n');
    Ok(line)
}
