//! Structured log events for pipeline outcomes.

use warden_core::models::{EligibilityDecision, RiskAssessment};

/// A terminal decision for a request.
pub fn decision_made(risk: &RiskAssessment, decision: &EligibilityDecision, confidence: f64) {
    tracing::info!(
        event = "decision_made",
        category = ?risk.category,
        level = %risk.level,
        decision = %decision.decision,
        reason_code = %decision.reason_code,
        confidence,
        "decision made"
    );
}

/// A subsystem fell back to a lower-quality mode.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// A response was withheld because its audit record could not be written.
pub fn audit_failed(request_id: &str, error: &str) {
    tracing::error!(
        event = "audit_failed",
        request_id = %request_id,
        error = %error,
        "audit write failed, response withheld"
    );
}
