use crate::errors::WardenResult;

/// Exact similarity index over document vectors.
pub trait IVectorStore: Send + Sync {
    /// Add or replace vectors keyed by id.
    fn upsert(&mut self, ids: &[String], vectors: Vec<Vec<f32>>) -> WardenResult<()>;

    /// The `k` highest inner-product scores, descending, ties in insertion order.
    fn search(&self, vector: &[f32], k: usize) -> WardenResult<Vec<(String, f32)>>;

    /// Number of stored vectors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
