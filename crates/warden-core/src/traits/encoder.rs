use crate::errors::WardenResult;

/// Text-to-vector encoder. Implementations are selected by backend name.
pub trait IEmbeddingEncoder: Send + Sync {
    /// Encode texts into fixed-length vectors, one per input, same order.
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>>;

    /// Encode a single text.
    fn encode_one(&self, text: &str) -> WardenResult<Vec<f32>> {
        let mut vectors = self.encode(&[text.to_string()])?;
        vectors.pop().ok_or_else(|| {
            crate::errors::EmbeddingError::InferenceFailed {
                reason: "encoder returned no vector".to_string(),
            }
            .into()
        })
    }

    /// The dimensionality of vectors produced by this encoder.
    fn dimensions(&self) -> usize;

    /// Human-readable backend name.
    fn name(&self) -> &str;

    /// Model identifier in use.
    fn model_id(&self) -> &str;

    /// Whether this encoder is currently usable.
    fn is_available(&self) -> bool;
}
