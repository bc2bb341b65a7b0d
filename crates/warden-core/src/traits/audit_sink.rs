use crate::errors::WardenResult;
use crate::models::AuditRecord;

/// Durable, append-only destination for audit records.
///
/// Shared by all in-flight requests; implementations serialize writers so
/// each record lands as one atomic unit.
pub trait IAuditSink: Send + Sync {
    /// Append one record. Returns only after the record is durable.
    fn append(&self, record: &AuditRecord) -> WardenResult<()>;

    /// Flush any buffered state.
    fn flush(&self) -> WardenResult<()>;

    /// Backend name.
    fn name(&self) -> &str;
}
