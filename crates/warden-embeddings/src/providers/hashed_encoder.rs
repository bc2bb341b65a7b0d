//! Term-hashing encoder.
//!
//! Buckets each term into a fixed-dimension vector with FNV-1a and weights
//! it by term frequency. Fully deterministic and always available, which
//! makes it the default backend and the one tests run against.

use std::collections::BTreeMap;

use warden_core::errors::WardenResult;
use warden_core::traits::IEmbeddingEncoder;

use super::l2_normalize;

const MODEL_ID: &str = "fnv1a-tf";

/// Deterministic dense vectors from hashed term frequencies.
///
/// The model id is recorded for audit purposes only; every id produces the
/// same vector space, so an override never invalidates the startup index.
#[derive(Debug, Clone)]
pub struct HashedEncoder {
    dimensions: usize,
    model_id: String,
}

impl HashedEncoder {
    pub fn new(dimensions: usize, model: Option<&str>) -> Self {
        Self {
            dimensions,
            model_id: model.unwrap_or(MODEL_ID).to_string(),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimensions];
        let terms = Self::terms(text);
        if terms.is_empty() || self.dimensions == 0 {
            return vector;
        }

        // BTreeMap keeps float accumulation order stable across runs.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for term in &terms {
            *tf.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in tf {
            // Longer terms carry more signal than short function words.
            let weight = 1.0 + (term.len() as f32).ln();
            vector[Self::bucket(term, self.dimensions)] += (count / total) * weight;
        }

        l2_normalize(&mut vector);
        vector
    }
}

impl IEmbeddingEncoder for HashedEncoder {
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn is_available(&self) -> bool {
        true
    }
}
