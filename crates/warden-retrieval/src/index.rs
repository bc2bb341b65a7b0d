use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;
use warden_core::errors::{EmbeddingError, WardenResult};
use warden_core::traits::{IEmbeddingEncoder, IVectorStore};

use crate::knowledge::KnowledgeBase;

/// Document vectors for a knowledge base plus the encoder that produced them.
///
/// Built once at startup and owned by the [`RetrievalEngine`](crate::RetrievalEngine);
/// read-only afterwards.
pub struct RetrievalIndex {
    encoder: Arc<dyn IEmbeddingEncoder>,
    store: Box<dyn IVectorStore>,
}

impl RetrievalIndex {
    /// Encode every document's content and load the vectors into `store`.
    pub fn build(
        kb: &KnowledgeBase,
        encoder: Arc<dyn IEmbeddingEncoder>,
        mut store: Box<dyn IVectorStore>,
    ) -> WardenResult<Self> {
        let ids: Vec<String> = kb.documents().iter().map(|d| d.id.clone()).collect();
        let texts: Vec<String> = kb.documents().iter().map(|d| d.content.clone()).collect();

        if !texts.is_empty() {
            let vectors = encoder.encode(&texts)?;
            if let Some(bad) = vectors.iter().find(|v| v.len() != encoder.dimensions()) {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: encoder.dimensions(),
                    actual: bad.len(),
                }
                .into());
            }
            store.upsert(&ids, vectors)?;
        }

        info!(
            encoder = encoder.name(),
            model = encoder.model_id(),
            vectors = store.len(),
            "retrieval index built"
        );
        Ok(Self { encoder, store })
    }

    /// The encoder the document vectors came from.
    pub fn encoder(&self) -> &Arc<dyn IEmbeddingEncoder> {
        &self.encoder
    }

    pub fn dimensions(&self) -> usize {
        self.encoder.dimensions()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Inner-product score of every indexed document against `query_vector`.
    pub fn similarities(&self, query_vector: &[f32]) -> WardenResult<HashMap<String, f32>> {
        if query_vector.len() != self.dimensions() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions(),
                actual: query_vector.len(),
            }
            .into());
        }
        Ok(self
            .store
            .search(query_vector, self.store.len())?
            .into_iter()
            .collect())
    }

    /// Encode `query` and return the `k` nearest document ids.
    pub fn search(&self, query: &str, k: usize) -> WardenResult<Vec<(String, f32)>> {
        let vector = self.encoder.encode_one(query)?;
        self.store.search(&vector, k)
    }
}
