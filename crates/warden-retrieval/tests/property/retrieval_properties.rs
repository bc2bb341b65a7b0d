//! Property tests for retrieval scores and confidence bounds.

use proptest::prelude::*;
use warden_core::models::{Document, PolicyDecision, PolicyMode, RetrievalResult};
use warden_retrieval::{ConfidenceScorer, KnowledgeBase, RetrievalEngine};

const VOCAB: &[&str] = &[
    "alpha", "beta", "gamma", "delta", "ai", "systems", "learning", "data",
];

fn policy() -> PolicyDecision {
    PolicyDecision {
        mode: PolicyMode::Normal,
        min_confidence: 0.5,
        retrieval_required: true,
        generation_allowed: true,
    }
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..6).prop_map(|w| w.join(" "))
}

fn knowledge_base() -> impl Strategy<Value = KnowledgeBase> {
    prop::collection::vec(text(), 0..8).prop_map(|contents| {
        let docs = contents
            .into_iter()
            .enumerate()
            .map(|(i, content)| Document {
                id: format!("doc_{i}"),
                title: format!("Doc {i}"),
                content,
                source: "prop".to_string(),
                reliability: 0.5,
            })
            .collect();
        KnowledgeBase::new(docs).unwrap()
    })
}

proptest! {
    #[test]
    fn score_is_coverage_ratio(kb in knowledge_base(), query in text()) {
        let size = kb.len();
        let engine = RetrievalEngine::new(kb, None, false);
        let r = engine.retrieve(&query, &policy()).result;

        prop_assert_eq!(r.documents.len(), r.candidate_count);
        prop_assert!((0.0..=1.0).contains(&r.retrieval_score));
        if r.candidate_count == 0 {
            prop_assert_eq!(r.retrieval_score, 0.0);
        } else {
            let expected = (r.candidate_count as f64 / size as f64).min(1.0);
            prop_assert!((r.retrieval_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn confidence_is_bounded(n in 0usize..10, raw in 0.0f64..=1.0) {
        let result = RetrievalResult::new(vec!["d".to_string(); n], raw, false);
        let c = ConfidenceScorer::new().score(&result).score;
        prop_assert!((0.0..=0.9).contains(&c));
        if n == 1 {
            prop_assert!(c <= 0.6);
        }
        if n == 0 {
            prop_assert_eq!(c, 0.0);
        }
    }

    #[test]
    fn confidence_has_two_decimals(n in 1usize..10, raw in 0.0f64..=1.0) {
        let result = RetrievalResult::new(vec!["d".to_string(); n], raw, false);
        let c = ConfidenceScorer::new().score(&result).score;
        prop_assert!(((c * 100.0).round() - c * 100.0).abs() < 1e-9);
    }
}
