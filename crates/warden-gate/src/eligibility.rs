//! Two-guard eligibility decision. No retries, no hidden state: the
//! verdict is always re-derivable from its two inputs.

use tracing::info;
use warden_core::models::{
    ConfidenceScore, Decision, EligibilityDecision, PolicyDecision, ReasonCode,
};

pub const REASON_POLICY_BLOCK: &str = "Generation not permitted by policy";
pub const REASON_LOW_CONFIDENCE: &str = "Confidence below required threshold";
pub const REASON_SAFE_TO_ANSWER: &str = "All conditions satisfied";

#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityGate;

impl EligibilityGate {
    pub fn new() -> Self {
        Self
    }

    /// Guards, first match wins:
    /// 1. generation not allowed → `ABSTAIN / POLICY_BLOCK`
    /// 2. confidence below threshold → `ABSTAIN / LOW_CONFIDENCE`
    /// 3. otherwise → `ALLOW / SAFE_TO_ANSWER`
    pub fn evaluate(
        &self,
        policy: &PolicyDecision,
        confidence: &ConfidenceScore,
    ) -> EligibilityDecision {
        let decision = if !policy.generation_allowed {
            EligibilityDecision::new(
                Decision::Abstain,
                ReasonCode::PolicyBlock,
                REASON_POLICY_BLOCK,
            )
        } else if confidence.score < policy.min_confidence {
            EligibilityDecision::new(
                Decision::Abstain,
                ReasonCode::LowConfidence,
                REASON_LOW_CONFIDENCE,
            )
        } else {
            EligibilityDecision::new(
                Decision::Allow,
                ReasonCode::SafeToAnswer,
                REASON_SAFE_TO_ANSWER,
            )
        };

        info!(
            decision = %decision.decision,
            reason_code = %decision.reason_code,
            confidence = confidence.score,
            min_confidence = policy.min_confidence,
            "eligibility evaluated"
        );
        decision
    }
}
