use super::{AuditError, ConfigError, EmbeddingError, KnowledgeError};

/// Root error type for all Warden failures.
///
/// The deterministic stages (classify, resolve, score, gate) never produce
/// one of these. Only construction, encoding, knowledge loading, and audit
/// persistence can fail.
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("audit error: {0}")]
    AuditError(#[from] AuditError),

    #[error("knowledge base error: {0}")]
    KnowledgeError(#[from] KnowledgeError),

    /// The request ran but could not be durably recorded. The caller must
    /// not receive the response.
    #[error("service unavailable: audit record for request {request_id} could not be written: {reason}")]
    AuditUnavailable { request_id: String, reason: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type WardenResult<T> = Result<T, WardenError>;
