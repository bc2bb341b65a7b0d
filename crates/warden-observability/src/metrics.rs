//! Lock-free decision counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use warden_core::models::{Decision, EligibilityDecision, ReasonCode};

/// Per-process counters, safe to bump from any number of request threads.
#[derive(Debug, Default)]
pub struct DecisionMetrics {
    requests: AtomicU64,
    allow: AtomicU64,
    abstain: AtomicU64,
    clarify: AtomicU64,
    policy_block: AtomicU64,
    low_confidence: AtomicU64,
    no_evidence: AtomicU64,
    safe_to_answer: AtomicU64,
    audit_failures: AtomicU64,
    degradations: AtomicU64,
}

/// Point-in-time copy of [`DecisionMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub allow: u64,
    pub abstain: u64,
    pub clarify: u64,
    pub policy_block: u64,
    pub low_confidence: u64,
    pub no_evidence: u64,
    pub safe_to_answer: u64,
    pub audit_failures: u64,
    pub degradations: u64,
}

impl DecisionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one evaluated request.
    pub fn record_decision(&self, decision: &EligibilityDecision) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        let by_decision = match decision.decision {
            Decision::Allow => &self.allow,
            Decision::Abstain => &self.abstain,
            Decision::Clarify => &self.clarify,
        };
        by_decision.fetch_add(1, Ordering::Relaxed);
        let by_reason = match decision.reason_code {
            ReasonCode::PolicyBlock => &self.policy_block,
            ReasonCode::LowConfidence => &self.low_confidence,
            ReasonCode::NoEvidence => &self.no_evidence,
            ReasonCode::SafeToAnswer => &self.safe_to_answer,
        };
        by_reason.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_audit_failure(&self) {
        self.audit_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_degradation(&self) {
        self.degradations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        MetricsSnapshot {
            requests: load(&self.requests),
            allow: load(&self.allow),
            abstain: load(&self.abstain),
            clarify: load(&self.clarify),
            policy_block: load(&self.policy_block),
            low_confidence: load(&self.low_confidence),
            no_evidence: load(&self.no_evidence),
            safe_to_answer: load(&self.safe_to_answer),
            audit_failures: load(&self.audit_failures),
            degradations: load(&self.degradations),
        }
    }

    /// Snapshot as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}
