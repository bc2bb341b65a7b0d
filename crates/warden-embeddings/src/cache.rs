//! L1 in-memory query-embedding cache.
//!
//! moka with TinyLFU admission. Keys are blake3 hashes of model id and text,
//! so two encoders never share entries.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use warden_core::errors::{EmbeddingError, WardenResult};
use warden_core::traits::IEmbeddingEncoder;

/// Bounded map from content hash to embedding.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Cache key for `text` under `model_id`.
    pub fn key(model_id: &str, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(model_id.as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

/// Encoder decorator that serves repeated texts from a [`QueryCache`].
///
/// Only successful encodings are cached; a failure is retried on the next
/// request rather than remembered.
pub struct CachedEncoder {
    inner: Arc<dyn IEmbeddingEncoder>,
    cache: QueryCache,
}

impl CachedEncoder {
    pub fn new(inner: Arc<dyn IEmbeddingEncoder>, max_entries: u64) -> Self {
        Self {
            inner,
            cache: QueryCache::new(max_entries),
        }
    }

    pub fn inner(&self) -> &Arc<dyn IEmbeddingEncoder> {
        &self.inner
    }
}

impl IEmbeddingEncoder for CachedEncoder {
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        let model_id = self.inner.model_id();
        let keys: Vec<String> = texts.iter().map(|t| QueryCache::key(model_id, t)).collect();

        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();
        let missing: Vec<usize> = (0..texts.len()).filter(|&i| out[i].is_none()).collect();
        if missing.is_empty() {
            return Ok(out.into_iter().flatten().collect());
        }

        let batch: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
        let fresh = self.inner.encode(&batch)?;
        if fresh.len() != batch.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("expected {} vectors, got {}", batch.len(), fresh.len()),
            }
            .into());
        }
        for (&i, vector) in missing.iter().zip(fresh) {
            self.cache.insert(keys[i].clone(), vector.clone());
            out[i] = Some(vector);
        }

        Ok(out.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
