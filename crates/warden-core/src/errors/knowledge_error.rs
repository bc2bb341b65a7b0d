/// Knowledge base loading errors. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge base {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse knowledge base: {reason}")]
    ParseFailed { reason: String },

    #[error("duplicate document id: {id}")]
    DuplicateId { id: String },

    #[error("document {id} has reliability {reliability} outside [0, 1]")]
    InvalidReliability { id: String, reliability: f64 },
}
