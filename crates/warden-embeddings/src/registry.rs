//! Backend name → encoder constructor.
//!
//! All validation happens here, at construction time. A config that names an
//! unknown backend or lacks a credential or model never reaches a request.

use std::sync::Arc;

use tracing::info;
use warden_core::config::EmbeddingConfig;
use warden_core::errors::{ConfigError, WardenResult};
use warden_core::traits::IEmbeddingEncoder;

use crate::cache::CachedEncoder;
use crate::providers::{ApiProvider, HashedEncoder, OnnxProvider};

/// Names accepted in `embedding.backend`.
pub const BACKEND_NAMES: [&str; 4] = ["hashed", "onnx", "api", "none"];

/// Build the encoder named by `config.backend`.
///
/// Returns `Ok(None)` for `"none"`: retrieval then keeps keyword order.
/// The `"onnx"` backend reads its model file from `model` when set, else from
/// `model_path`, so a per-request override can point at another file.
///
/// # Errors
/// `ConfigError::UnknownBackend`, `MissingModel`, or `MissingCredential` for
/// an incomplete config; `EmbeddingError::ModelLoadFailed` when an ONNX model
/// cannot be opened.
pub fn create_encoder(config: &EmbeddingConfig) -> WardenResult<Option<Arc<dyn IEmbeddingEncoder>>> {
    let encoder: Arc<dyn IEmbeddingEncoder> = match config.backend.as_str() {
        "none" => {
            info!("embedding backend disabled, retrieval runs keyword-only");
            return Ok(None);
        }
        "hashed" => Arc::new(HashedEncoder::new(
            config.dimensions,
            config.model.as_deref(),
        )),
        "onnx" => {
            let path = config
                .model
                .as_deref()
                .or(config.model_path.as_deref())
                .ok_or_else(|| ConfigError::MissingModel {
                    backend: "onnx".to_string(),
                })?;
            Arc::new(OnnxProvider::load(path, config.dimensions)?)
        }
        "api" => {
            let model = config.model.clone().ok_or_else(|| ConfigError::MissingModel {
                backend: "api".to_string(),
            })?;
            let api_key = std::env::var(&config.api_key_env)
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingCredential {
                    backend: "api".to_string(),
                    variable: config.api_key_env.clone(),
                })?;
            Arc::new(ApiProvider::new(
                model,
                api_key,
                config.endpoint.clone(),
                config.dimensions,
                config.timeout_ms,
            )?)
        }
        other => {
            return Err(ConfigError::UnknownBackend {
                kind: "embedding".to_string(),
                name: other.to_string(),
            }
            .into())
        }
    };

    info!(
        backend = encoder.name(),
        model = encoder.model_id(),
        dims = encoder.dimensions(),
        "embedding encoder ready"
    );

    if config.query_cache_size == 0 {
        return Ok(Some(encoder));
    }
    Ok(Some(Arc::new(CachedEncoder::new(
        encoder,
        config.query_cache_size,
    ))))
}
