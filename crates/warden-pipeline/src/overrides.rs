//! Per-request embedding model overrides.
//!
//! An override builds an encoder for the configured backend with a different
//! model id. Encoders are memoised by model id so each is constructed once.
//! An override that cannot be built, or whose vectors do not fit the startup
//! index, is reported as unavailable and retrieval degrades to keyword order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use warden_core::config::EmbeddingConfig;
use warden_core::errors::EmbeddingError;
use warden_core::traits::IEmbeddingEncoder;
use warden_embeddings::create_encoder;

/// Distinct override models remembered at once.
pub const MAX_OVERRIDES: usize = 32;

type Resolved = Result<Arc<dyn IEmbeddingEncoder>, String>;

pub struct OverrideEncoders {
    base: EmbeddingConfig,
    /// Width of the startup index, when there is one.
    index_dimensions: Option<usize>,
    resolved: Mutex<HashMap<String, Resolved>>,
}

impl OverrideEncoders {
    pub fn new(base: EmbeddingConfig, index_dimensions: Option<usize>) -> Self {
        Self {
            base,
            index_dimensions,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// The encoder for `model`, or why there is none.
    pub fn resolve(&self, model: &str) -> Resolved {
        if let Some(hit) = self.resolved.lock().ok().and_then(|m| m.get(model).cloned()) {
            return hit;
        }

        // Built outside the lock: construction may load a model file.
        let resolved = self.build(model);
        if let Err(reason) = &resolved {
            warn!(model, %reason, "embedding override unavailable");
        }

        if let Ok(mut map) = self.resolved.lock() {
            if map.len() < MAX_OVERRIDES {
                map.entry(model.to_string()).or_insert_with(|| resolved.clone());
            }
        }
        resolved
    }

    fn build(&self, model: &str) -> Resolved {
        let dims = match self.index_dimensions {
            Some(dims) => dims,
            None => return Err("no vector index to re-rank against".to_string()),
        };

        let encoder = create_encoder(&self.base.with_model(model))
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "embedding backend disabled".to_string())?;

        if encoder.dimensions() != dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dims,
                actual: encoder.dimensions(),
            }
            .to_string());
        }

        debug!(model, backend = encoder.name(), "embedding override ready");
        Ok(encoder)
    }

    pub fn len(&self) -> usize {
        self.resolved.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
