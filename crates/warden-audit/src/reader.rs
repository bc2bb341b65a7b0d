use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use warden_core::errors::{AuditError, WardenResult};
use warden_core::models::AuditRecord;

/// Read every record back from a JSONL audit file, in file order.
///
/// Blank lines are skipped; any other line that does not parse is an error
/// naming its line number.
pub fn read_records(path: impl AsRef<Path>) -> WardenResult<Vec<AuditRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| AuditError::OpenFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::new();
    for (i, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| AuditError::OpenFailed {
            path: path.display().to_string(),
            reason: format!("line {}: {e}", i + 1),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| AuditError::Serialization {
            reason: format!("line {}: {e}", i + 1),
        })?;
        records.push(record);
    }
    Ok(records)
}
