mod audit_error;
mod config_error;
mod embedding_error;
mod knowledge_error;
mod warden_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use knowledge_error::KnowledgeError;
pub use warden_error::{WardenError, WardenResult};
