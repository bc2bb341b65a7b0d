use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding encoder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Encoder backend: "hashed", "onnx", "api", "none".
    pub backend: String,
    /// Model identifier. Required by the "api" backend.
    pub model: Option<String>,
    /// Path to the ONNX model file. Required by the "onnx" backend.
    pub model_path: Option<String>,
    /// Endpoint for the "api" backend. Provider default when absent.
    pub endpoint: Option<String>,
    /// Env var holding the API credential.
    pub api_key_env: String,
    /// Vector dimensions produced by the encoder.
    pub dimensions: usize,
    /// Per-call deadline; a slower call is treated as unavailable.
    pub timeout_ms: u64,
    /// L1 query-embedding cache max entries.
    pub query_cache_size: u64,
}

impl EmbeddingConfig {
    /// Copy of this config pointing at a different model id.
    pub fn with_model(&self, model: &str) -> Self {
        Self {
            model: Some(model.to_string()),
            ..self.clone()
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_EMBEDDING_BACKEND.to_string(),
            model: None,
            model_path: None,
            endpoint: None,
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
