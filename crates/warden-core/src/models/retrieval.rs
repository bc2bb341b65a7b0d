use serde::{Deserialize, Serialize};

/// Output of the retrieval engine.
///
/// `candidate_count` always equals `documents.len()`; construct through
/// [`RetrievalResult::new`] or [`RetrievalResult::empty`] to keep it so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Candidate contents in final ranked order.
    pub documents: Vec<String>,
    /// Fraction of the knowledge base that matched, in [0, 1].
    pub retrieval_score: f64,
    pub candidate_count: usize,
    /// Whether vector re-ranking was applied to the keyword candidates.
    #[serde(default)]
    pub reranked: bool,
}

impl RetrievalResult {
    pub fn new(documents: Vec<String>, retrieval_score: f64, reranked: bool) -> Self {
        Self {
            candidate_count: documents.len(),
            documents,
            retrieval_score: retrieval_score.clamp(0.0, 1.0),
            reranked,
        }
    }

    /// Result for a query that was not run or matched nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0, false)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
