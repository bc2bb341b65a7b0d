use chrono::Utc;
use warden_core::models::{
    AuditRecord, ConfidenceScore, Decision, EligibilityDecision, PolicyDecision, PolicyMode,
    ReasonCode, Response, RetrievalResult, RiskAssessment, RiskCategory, RiskLevel,
};

/// A complete ABSTAIN record for `request_id`.
pub fn record(request_id: &str, query: &str) -> AuditRecord {
    let decision = EligibilityDecision::new(
        Decision::Abstain,
        ReasonCode::LowConfidence,
        "Confidence below required threshold",
    );
    AuditRecord::new(
        request_id.to_string(),
        Utc::now(),
        query.to_string(),
        None,
        RiskAssessment::new(RiskCategory::General, RiskLevel::Low),
        PolicyDecision {
            mode: PolicyMode::Normal,
            min_confidence: 0.5,
            retrieval_required: true,
            generation_allowed: true,
        },
        RetrievalResult::empty(),
        ConfidenceScore::zero(),
        decision.clone(),
        Response {
            request_id: request_id.to_string(),
            status: decision.decision,
            message: decision.reason,
            answer: None,
        },
    )
}
