//! SQLite audit table behind a single writer connection.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};
use tracing::debug;
use warden_core::errors::{AuditError, WardenResult};
use warden_core::models::AuditRecord;
use warden_core::traits::IAuditSink;

fn sqlite_err(e: rusqlite::Error) -> AuditError {
    AuditError::SqliteError {
        message: e.to_string(),
    }
}

/// Rollback journal with FULL sync: a committed record survives power loss.
const PRAGMAS: &str = "
    PRAGMA journal_mode = DELETE;
    PRAGMA synchronous = FULL;
    PRAGMA busy_timeout = 5000;
";

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS audit_log (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        request_id      TEXT NOT NULL UNIQUE,
        timestamp       TEXT NOT NULL,
        decision        TEXT NOT NULL,
        reason_code     TEXT NOT NULL,
        schema_version  TEXT NOT NULL,
        record          TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_audit_timestamp ON audit_log(timestamp);
    CREATE INDEX IF NOT EXISTS idx_audit_decision ON audit_log(decision);
";

/// One row per request; the full record is kept as JSON in `record`, with
/// the fields operators filter on lifted into columns.
pub struct SqliteAuditSink {
    conn: Mutex<Connection>,
}

impl SqliteAuditSink {
    pub fn open(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref();
        let open_failed = |reason: String| AuditError::OpenFailed {
            path: path.display().to_string(),
            reason,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| open_failed(e.to_string()))?;
        }
        let conn = Connection::open(path).map_err(|e| open_failed(e.to_string()))?;
        debug!(path = %path.display(), "SQLite audit sink opened");
        Self::init(conn)
    }

    pub fn open_in_memory() -> WardenResult<Self> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> WardenResult<Self> {
        conn.execute_batch(PRAGMAS).map_err(sqlite_err)?;
        conn.execute_batch(SCHEMA).map_err(sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> WardenResult<T>
    where
        F: FnOnce(&Connection) -> WardenResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| AuditError::LockPoisoned)?;
        f(&guard)
    }

    /// Every stored record in insertion order.
    pub fn records(&self) -> WardenResult<Vec<AuditRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT record FROM audit_log ORDER BY id")
                .map_err(sqlite_err)?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .map_err(sqlite_err)?;

            let mut records = Vec::new();
            for row in rows {
                let json = row.map_err(sqlite_err)?;
                let record = serde_json::from_str(&json).map_err(|e| AuditError::Serialization {
                    reason: e.to_string(),
                })?;
                records.push(record);
            }
            Ok(records)
        })
    }

    pub fn count(&self) -> WardenResult<usize> {
        self.with_conn(|conn| {
            let n: i64 = conn
                .query_row("SELECT COUNT(*) FROM audit_log", [], |row| row.get(0))
                .map_err(sqlite_err)?;
            Ok(n as usize)
        })
    }
}

impl IAuditSink for SqliteAuditSink {
    fn append(&self, record: &AuditRecord) -> WardenResult<()> {
        let json = record
            .to_json_line()
            .map_err(|e| AuditError::Serialization {
                reason: e.to_string(),
            })?;
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO audit_log
                    (request_id, timestamp, decision, reason_code, schema_version, record)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    record.request_id,
                    record.timestamp.to_rfc3339(),
                    record.decision.decision.as_str(),
                    record.decision.reason_code.as_str(),
                    record.schema_version,
                    json,
                ],
            )
            .map_err(sqlite_err)?;
            Ok(())
        })
    }

    fn flush(&self) -> WardenResult<()> {
        // Each insert commits on its own.
        Ok(())
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
