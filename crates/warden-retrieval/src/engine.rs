//! RetrievalEngine: keyword filter, optional vector re-rank, coverage score.
//!
//! Stage 1: keyword filter (authoritative). A document is a candidate iff its
//!          token set shares a token with the query's.
//! Stage 2: vector re-rank (advisory). Candidates are stably sorted by inner
//!          product against the query vector. Any encoder problem skips this
//!          stage and is reported as a degradation, never as an error.
//! Stage 3: score = candidates / knowledge base size, capped at 1.

use std::sync::Arc;

use tracing::{debug, warn};
use warden_core::config::RetrievalConfig;
use warden_core::errors::{EmbeddingError, WardenResult};
use warden_core::models::{DegradationEvent, Document, PolicyDecision, RetrievalResult};
use warden_core::traits::IEmbeddingEncoder;

use crate::index::RetrievalIndex;
use crate::knowledge::KnowledgeBase;
use crate::tokenize::{overlaps, tokenize};
use crate::vector::{create_vector_store, rank_key};

pub const DEGRADATION_COMPONENT: &str = "retrieval.rerank";
pub const DEGRADATION_FALLBACK: &str = "keyword_order";

/// Which encoder re-ranks a given request.
pub enum QueryEncoder<'a> {
    /// The encoder the index was built with.
    Index,
    /// A per-request replacement. Must produce vectors of the index's width.
    Override(&'a dyn IEmbeddingEncoder),
    /// The requested encoder could not be constructed.
    Unavailable { reason: String },
}

/// What retrieval produced, plus the degradation it absorbed if any.
#[derive(Debug, Clone)]
pub struct RetrievalOutcome {
    pub result: RetrievalResult,
    pub degradation: Option<DegradationEvent>,
}

impl RetrievalOutcome {
    fn clean(result: RetrievalResult) -> Self {
        Self {
            result,
            degradation: None,
        }
    }
}

/// Retrieval over an immutable knowledge base and optional vector index.
///
/// Shared by reference across concurrent requests; nothing here mutates after
/// construction.
pub struct RetrievalEngine {
    kb: KnowledgeBase,
    index: Option<RetrievalIndex>,
    rerank: bool,
}

impl RetrievalEngine {
    /// Assemble from pre-built parts.
    pub fn new(kb: KnowledgeBase, index: Option<RetrievalIndex>, rerank: bool) -> Self {
        Self { kb, index, rerank }
    }

    /// Build the vector index for `kb` with `encoder` and the configured store.
    ///
    /// An encoder that fails while indexing leaves the engine keyword-only; an
    /// unknown vector store name is a configuration error.
    pub fn build(
        kb: KnowledgeBase,
        encoder: Option<Arc<dyn IEmbeddingEncoder>>,
        config: &RetrievalConfig,
    ) -> WardenResult<Self> {
        let store = create_vector_store(&config.vector_store)?;
        let index = match encoder {
            Some(encoder) if config.rerank => match RetrievalIndex::build(&kb, encoder, store) {
                Ok(index) => Some(index),
                Err(e) => {
                    warn!(error = %e, "index build failed, retrieval runs keyword-only");
                    None
                }
            },
            _ => None,
        };
        Ok(Self::new(kb, index, config.rerank))
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn index(&self) -> Option<&RetrievalIndex> {
        self.index.as_ref()
    }

    /// Retrieve with the index's own encoder.
    pub fn retrieve(&self, query: &str, policy: &PolicyDecision) -> RetrievalOutcome {
        self.retrieve_with(query, policy, QueryEncoder::Index)
    }

    /// Retrieve, re-ranking with `encoder`.
    pub fn retrieve_with(
        &self,
        query: &str,
        policy: &PolicyDecision,
        encoder: QueryEncoder<'_>,
    ) -> RetrievalOutcome {
        if !policy.retrieval_required {
            debug!("retrieval not required by policy");
            return RetrievalOutcome::clean(RetrievalResult::empty());
        }

        let candidates = self.keyword_candidates(query);
        let score = self.coverage(candidates.len());

        let (ordered, reranked, degradation) = match self.rerank(query, &candidates, encoder) {
            Ok(Some(order)) => (order, true, None),
            Ok(None) => (candidates, false, None),
            Err(reason) => {
                warn!(%reason, "re-rank skipped, keeping keyword order");
                let event =
                    DegradationEvent::now(DEGRADATION_COMPONENT, reason, DEGRADATION_FALLBACK);
                (candidates, false, Some(event))
            }
        };

        let documents: Vec<String> = ordered.iter().map(|d| d.content.clone()).collect();
        let result = RetrievalResult::new(documents, score, reranked);
        debug!(
            candidates = result.candidate_count,
            score = result.retrieval_score,
            reranked,
            "retrieval complete"
        );
        RetrievalOutcome {
            result,
            degradation,
        }
    }

    /// Candidates in knowledge-base order.
    fn keyword_candidates(&self, query: &str) -> Vec<&Document> {
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Vec::new();
        }
        self.kb
            .indexed()
            .filter(|(_, tokens)| overlaps(&query_tokens, tokens))
            .map(|(doc, _)| doc)
            .collect()
    }

    fn coverage(&self, matched: usize) -> f64 {
        if self.kb.is_empty() || matched == 0 {
            return 0.0;
        }
        (matched as f64 / self.kb.len() as f64).min(1.0)
    }

    /// `Ok(None)`: re-ranking does not apply. `Err`: it applied and failed.
    fn rerank<'d>(
        &self,
        query: &str,
        candidates: &[&'d Document],
        encoder: QueryEncoder<'_>,
    ) -> Result<Option<Vec<&'d Document>>, String> {
        let index = match &self.index {
            Some(index) if self.rerank => index,
            _ => return Ok(None),
        };
        if candidates.is_empty() {
            return Ok(None);
        }

        let encoder: &dyn IEmbeddingEncoder = match encoder {
            QueryEncoder::Index => index.encoder().as_ref(),
            QueryEncoder::Override(e) => e,
            QueryEncoder::Unavailable { reason } => return Err(reason),
        };
        if !encoder.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: format!("{}:{}", encoder.name(), encoder.model_id()),
            }
            .to_string());
        }

        let similarities = encoder
            .encode_one(query)
            .and_then(|v| index.similarities(&v))
            .map_err(|e| e.to_string())?;

        let mut scored: Vec<(&Document, f32)> = candidates
            .iter()
            .map(|d| (*d, similarities.get(&d.id).copied().unwrap_or(f32::MIN)))
            .collect();
        scored.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));
        Ok(Some(scored.into_iter().map(|(d, _)| d).collect()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use warden_core::models::PolicyMode;

    use super::*;
    use crate::vector::InMemoryVectorStore;

    fn policy(retrieval_required: bool) -> PolicyDecision {
        PolicyDecision {
            mode: PolicyMode::Normal,
            min_confidence: 0.5,
            retrieval_required,
            generation_allowed: true,
        }
    }

    fn doc(id: &str, content: &str) -> Document {
        Document {
            id: id.to_string(),
            title: id.to_string(),
            content: content.to_string(),
            source: "test".to_string(),
            reliability: 1.0,
        }
    }

    /// Scores documents by how many times they contain "beta".
    struct BetaEncoder;

    impl IEmbeddingEncoder for BetaEncoder {
        fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| vec![t.matches("beta").count() as f32, 1.0])
                .collect())
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "beta"
        }
        fn model_id(&self) -> &str {
            "beta-v1"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    struct BrokenEncoder;

    impl IEmbeddingEncoder for BrokenEncoder {
        fn encode(&self, _texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
            Err(EmbeddingError::Timeout { timeout_ms: 5 }.into())
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "broken"
        }
        fn model_id(&self) -> &str {
            "broken-v1"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    /// Counts encode calls; vectors come from `BetaEncoder`.
    #[derive(Default)]
    struct CountingEncoder {
        calls: AtomicUsize,
    }

    impl IEmbeddingEncoder for CountingEncoder {
        fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BetaEncoder.encode(texts)
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "counting"
        }
        fn model_id(&self) -> &str {
            "counting-v1"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    /// Like `BetaEncoder`, but any text mentioning "gamma" encodes to NaN.
    struct NanEncoder;

    impl IEmbeddingEncoder for NanEncoder {
        fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|t| {
                    if t.contains("gamma") {
                        vec![f32::NAN, f32::NAN]
                    } else {
                        vec![t.matches("beta").count() as f32, 1.0]
                    }
                })
                .collect())
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "nan"
        }
        fn model_id(&self) -> &str {
            "nan-v1"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            doc("d1", "alpha gamma"),
            doc("d2", "alpha beta beta"),
            doc("d3", "alpha beta"),
            doc("d4", "delta"),
        ])
        .unwrap()
    }

    fn engine() -> RetrievalEngine {
        let kb = KnowledgeBase::new(vec![
            doc("d1", "alpha gamma"),
            doc("d2", "alpha beta beta"),
            doc("d3", "alpha beta"),
            doc("d4", "delta"),
        ])
        .unwrap();
        let index = RetrievalIndex::build(
            &kb,
            Arc::new(BetaEncoder),
            Box::new(InMemoryVectorStore::new()),
        )
        .unwrap();
        RetrievalEngine::new(kb, Some(index), true)
    }

    #[test]
    fn not_required_short_circuits() {
        let encoder = Arc::new(CountingEncoder::default());
        let kb = kb();
        let index = RetrievalIndex::build(
            &kb,
            encoder.clone(),
            Box::new(InMemoryVectorStore::new()),
        )
        .unwrap();
        let engine = RetrievalEngine::new(kb, Some(index), true);
        let indexing_calls = encoder.calls.load(Ordering::SeqCst);

        let out = engine.retrieve("alpha", &policy(false));
        assert_eq!(out.result, RetrievalResult::empty());
        assert!(out.degradation.is_none());
        assert_eq!(encoder.calls.load(Ordering::SeqCst), indexing_calls);

        let overriding = CountingEncoder::default();
        engine.retrieve_with("alpha", &policy(false), QueryEncoder::Override(&overriding));
        assert_eq!(overriding.calls.load(Ordering::SeqCst), 0);

        // The same query does reach the encoder once retrieval is required.
        engine.retrieve("alpha", &policy(true));
        assert_eq!(encoder.calls.load(Ordering::SeqCst), indexing_calls + 1);
    }

    #[test]
    fn nan_similarities_rank_after_real_ones() {
        let kb = kb();
        let index =
            RetrievalIndex::build(&kb, Arc::new(NanEncoder), Box::new(InMemoryVectorStore::new()))
                .unwrap();
        let engine = RetrievalEngine::new(kb, Some(index), true);

        let out = engine.retrieve("alpha", &policy(true));
        assert!(out.result.reranked);
        assert_eq!(
            out.result.documents,
            vec!["alpha beta beta", "alpha beta", "alpha gamma"]
        );
    }

    #[test]
    fn keyword_filter_decides_membership() {
        let out = engine().retrieve("alpha", &policy(true));
        assert_eq!(out.result.candidate_count, 3);
        assert_eq!(out.result.retrieval_score, 0.75);
        assert!(!out.result.documents.contains(&"delta".to_string()));
    }

    #[test]
    fn vector_similarity_reorders_candidates() {
        let out = engine().retrieve("alpha beta", &policy(true));
        assert!(out.result.reranked);
        assert_eq!(
            out.result.documents,
            vec!["alpha beta beta", "alpha beta", "alpha gamma"]
        );
    }

    #[test]
    fn encoder_failure_keeps_keyword_order() {
        let engine = engine();
        let out = engine.retrieve_with(
            "alpha beta",
            &policy(true),
            QueryEncoder::Override(&BrokenEncoder),
        );
        assert!(!out.result.reranked);
        assert_eq!(
            out.result.documents,
            vec!["alpha gamma", "alpha beta beta", "alpha beta"]
        );
        assert_eq!(out.result.retrieval_score, 0.75);
        let event = out.degradation.unwrap();
        assert_eq!(event.component, DEGRADATION_COMPONENT);
        assert!(event.failure.contains("timed out"));
    }

    #[test]
    fn unavailable_override_degrades() {
        let out = engine().retrieve_with(
            "alpha",
            &policy(true),
            QueryEncoder::Unavailable {
                reason: "no such model".to_string(),
            },
        );
        assert_eq!(out.result.candidate_count, 3);
        assert_eq!(out.degradation.unwrap().failure, "no such model");
    }

    #[test]
    fn no_match_scores_zero() {
        let out = engine().retrieve("omega", &policy(true));
        assert!(out.result.is_empty());
        assert_eq!(out.result.retrieval_score, 0.0);
        assert!(out.degradation.is_none(), "nothing to re-rank is not a failure");
    }

    #[test]
    fn empty_knowledge_base_scores_zero() {
        let engine = RetrievalEngine::new(KnowledgeBase::new(Vec::new()).unwrap(), None, true);
        let out = engine.retrieve("alpha", &policy(true));
        assert_eq!(out.result.retrieval_score, 0.0);
        assert_eq!(out.result.candidate_count, 0);
    }

    #[test]
    fn rerank_disabled_keeps_keyword_order() {
        let kb = KnowledgeBase::new(vec![doc("d1", "alpha"), doc("d2", "alpha beta")]).unwrap();
        let config = RetrievalConfig {
            rerank: false,
            ..RetrievalConfig::default()
        };
        let engine = RetrievalEngine::build(kb, Some(Arc::new(BetaEncoder)), &config).unwrap();
        assert!(engine.index().is_none());
        let out = engine.retrieve("alpha beta", &policy(true));
        assert_eq!(out.result.documents, vec!["alpha", "alpha beta"]);
        assert!(!out.result.reranked);
    }

    #[test]
    fn failing_index_build_falls_back_to_keywords() {
        let engine = RetrievalEngine::build(
            KnowledgeBase::baseline(),
            Some(Arc::new(BrokenEncoder)),
            &RetrievalConfig::default(),
        )
        .unwrap();
        assert!(engine.index().is_none());
        let out = engine.retrieve("artificial intelligence", &policy(true));
        assert_eq!(out.result.candidate_count, 2);
    }

    #[test]
    fn unknown_vector_store_is_config_error() {
        let config = RetrievalConfig {
            vector_store: "pinecone".to_string(),
            ..RetrievalConfig::default()
        };
        assert!(RetrievalEngine::build(KnowledgeBase::baseline(), None, &config).is_err());
    }
}
