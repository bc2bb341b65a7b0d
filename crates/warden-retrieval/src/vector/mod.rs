//! Vector store backends, selected by name.

mod memory;

use warden_core::errors::{ConfigError, WardenResult};
use warden_core::traits::IVectorStore;

pub use memory::InMemoryVectorStore;

/// Names accepted in `retrieval.vector_store`.
pub const VECTOR_STORE_NAMES: [&str; 1] = ["memory"];

/// Sort key for similarity scores under `total_cmp`: NaN ranks below every
/// real score and `-0.0` ties with `0.0`.
pub(crate) fn rank_key(score: f32) -> f32 {
    if score.is_nan() {
        f32::NEG_INFINITY
    } else {
        score + 0.0
    }
}

/// Construct the vector store named `name`.
pub fn create_vector_store(name: &str) -> WardenResult<Box<dyn IVectorStore>> {
    match name {
        "memory" => Ok(Box::new(InMemoryVectorStore::new())),
        other => Err(ConfigError::UnknownBackend {
            kind: "vector store".to_string(),
            name: other.to_string(),
        }
        .into()),
    }
}
