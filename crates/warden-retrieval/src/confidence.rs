use tracing::debug;
use warden_core::constants::{CONFIDENCE_CEILING, SINGLE_SOURCE_CONFIDENCE_CAP};
use warden_core::models::{ConfidenceScore, RetrievalResult};

/// Turns retrieval coverage into a bounded confidence.
///
/// 1. no documents → 0
/// 2. start from `retrieval_score`
/// 3. a single candidate caps at 0.6
/// 4. never above 0.9
/// 5. round to two decimals
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceScorer;

impl ConfidenceScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, retrieval: &RetrievalResult) -> ConfidenceScore {
        if retrieval.is_empty() {
            return ConfidenceScore::zero();
        }

        let mut score = retrieval.retrieval_score;
        if retrieval.candidate_count == 1 {
            score = score.min(SINGLE_SOURCE_CONFIDENCE_CAP);
        }
        score = score.min(CONFIDENCE_CEILING);
        let score = round2(score.max(0.0));

        debug!(score, candidates = retrieval.candidate_count, "confidence scored");
        ConfidenceScore::new(score)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
