/// Audit persistence errors. Fatal for the request that produced them.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("failed to open audit sink at {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    #[error("audit write failed: {reason}")]
    WriteFailed { reason: String },

    #[error("audit record serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("audit writer lock poisoned")]
    LockPoisoned,
}
