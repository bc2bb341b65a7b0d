//! ONNX Runtime encoder.
//!
//! Loads a sentence-embedding model via `ort` (v2), mean-pools the last
//! hidden state, and L2-normalises the result.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;
use warden_core::errors::{EmbeddingError, WardenResult};
use warden_core::traits::IEmbeddingEncoder;

use super::l2_normalize;

/// Local ONNX model encoder.
pub struct OnnxProvider {
    /// `Session::run` takes `&mut self`.
    session: Mutex<Session>,
    dimensions: usize,
    model_id: String,
}

impl OnnxProvider {
    /// Load a model file.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` if the file is missing or unreadable.
    pub fn load(model_path: &str, dimensions: usize) -> WardenResult<Self> {
        let path = Path::new(model_path);
        if !path.exists() {
            return Err(EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: "model file not found".to_string(),
            }
            .into());
        }

        let session = Session::builder()
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .with_intra_threads(2)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?
            .commit_from_file(model_path)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                path: model_path.to_string(),
                reason: e.to_string(),
            })?;

        let model_id = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_id, dims = dimensions, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_id,
        })
    }

    fn infer(&self, text: &str) -> WardenResult<Vec<f32>> {
        let token_ids = Self::token_ids(text);
        let seq_len = token_ids.len() as i64;
        let attention_mask = vec![1i64; token_ids.len()];

        let ids_tensor = Tensor::from_array((vec![1i64, seq_len], token_ids)).map_err(|e| {
            EmbeddingError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;
        let mask_tensor =
            Tensor::from_array((vec![1i64, seq_len], attention_mask)).map_err(|e| {
                EmbeddingError::InferenceFailed {
                    reason: format!("tensor creation error: {e}"),
                }
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) =
            outputs
                .iter()
                .next()
                .ok_or_else(|| EmbeddingError::InferenceFailed {
                    reason: "no output tensor".to_string(),
                })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let mut pooled = match shape.len() {
            // [1, seq, dims]
            3 => {
                let seq = shape[1] as usize;
                let dims = shape[2] as usize;
                let mut pooled = vec![0.0f32; dims];
                for row in data.chunks_exact(dims).take(seq) {
                    for (acc, v) in pooled.iter_mut().zip(row) {
                        *acc += v;
                    }
                }
                for v in &mut pooled {
                    *v /= seq.max(1) as f32;
                }
                pooled
            }
            // [1, dims], already pooled
            2 => data[..shape[1] as usize].to_vec(),
            _ => {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("unexpected output shape: {shape:?}"),
                }
                .into())
            }
        };

        if pooled.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: pooled.len(),
            }
            .into());
        }

        l2_normalize(&mut pooled);
        Ok(pooled)
    }

    /// Word-hash token ids framed by [CLS]/[SEP].
    fn token_ids(text: &str) -> Vec<i64> {
        let mut ids = vec![101i64];
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            let mut h: u32 = 0x811c9dc5;
            for b in word.to_lowercase().as_bytes() {
                h ^= *b as u32;
                h = h.wrapping_mul(0x01000193);
            }
            ids.push(1 + (h % 29_999) as i64);
        }
        ids.push(102);
        ids
    }
}

impl IEmbeddingEncoder for OnnxProvider {
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "onnx"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn is_available(&self) -> bool {
        true
    }
}
