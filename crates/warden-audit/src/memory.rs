use std::sync::Mutex;

use warden_core::errors::{AuditError, WardenResult};
use warden_core::models::AuditRecord;
use warden_core::traits::IAuditSink;

/// Keeps records in memory. For tests and dry runs; nothing survives the
/// process.
#[derive(Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record appended so far, in append order.
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IAuditSink for MemoryAuditSink {
    fn append(&self, record: &AuditRecord) -> WardenResult<()> {
        self.records
            .lock()
            .map_err(|_| AuditError::LockPoisoned)?
            .push(record.clone());
        Ok(())
    }

    fn flush(&self) -> WardenResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
