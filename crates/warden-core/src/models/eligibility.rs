use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Terminal verdict on whether generation may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Allow,
    Abstain,
    /// Reserved. The gate does not emit it.
    Clarify,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::Abstain => "ABSTAIN",
            Self::Clarify => "CLARIFY",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable reason behind a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    PolicyBlock,
    LowConfidence,
    /// Reserved. The gate reports missing evidence as `LowConfidence`.
    NoEvidence,
    SafeToAnswer,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PolicyBlock => "POLICY_BLOCK",
            Self::LowConfidence => "LOW_CONFIDENCE",
            Self::NoEvidence => "NO_EVIDENCE",
            Self::SafeToAnswer => "SAFE_TO_ANSWER",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the eligibility gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub decision: Decision,
    pub reason: String,
    pub reason_code: ReasonCode,
}

impl EligibilityDecision {
    pub fn new(decision: Decision, reason_code: ReasonCode, reason: impl Into<String>) -> Self {
        Self {
            decision,
            reason: reason.into(),
            reason_code,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.decision == Decision::Allow
    }
}
