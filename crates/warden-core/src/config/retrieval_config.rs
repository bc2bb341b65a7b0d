use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Re-rank keyword candidates by vector similarity when an encoder is present.
    pub rerank: bool,
    /// Vector store backend: "memory".
    pub vector_store: String,
    /// JSON knowledge base file. The built-in baseline is used when unset.
    pub knowledge_base_path: Option<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            rerank: defaults::DEFAULT_RERANK,
            vector_store: defaults::DEFAULT_VECTOR_STORE.to_string(),
            knowledge_base_path: None,
        }
    }
}
