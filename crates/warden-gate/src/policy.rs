//! Risk level → policy lookup. A fixed three-row table; only the
//! thresholds are tunable.

use warden_core::config::PolicyConfig;
use warden_core::models::{PolicyDecision, PolicyMode, RiskLevel};

/// Pure lookup from risk level to policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolicyResolver {
    thresholds: PolicyConfig,
}

impl PolicyResolver {
    /// Build from validated thresholds (see [`PolicyConfig::validate`]).
    pub fn new(thresholds: PolicyConfig) -> Self {
        Self { thresholds }
    }

    pub fn resolve(&self, level: RiskLevel) -> PolicyDecision {
        match level {
            RiskLevel::High => PolicyDecision {
                mode: PolicyMode::Strict,
                min_confidence: self.thresholds.high_min_confidence,
                retrieval_required: true,
                generation_allowed: false,
            },
            RiskLevel::Medium => PolicyDecision {
                mode: PolicyMode::Conservative,
                min_confidence: self.thresholds.medium_min_confidence,
                retrieval_required: true,
                generation_allowed: true,
            },
            RiskLevel::Low => PolicyDecision {
                mode: PolicyMode::Normal,
                min_confidence: self.thresholds.low_min_confidence,
                retrieval_required: true,
                generation_allowed: true,
            },
        }
    }
}

impl Default for PolicyResolver {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}
