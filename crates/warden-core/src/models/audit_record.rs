use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    ConfidenceScore, EligibilityDecision, PolicyDecision, Response, RetrievalResult,
    RiskAssessment,
};
use crate::constants::SCHEMA_VERSION;

/// Immutable per-request trace of every stage output. One per request,
/// append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub user_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_model_override: Option<String>,
    pub risk: RiskAssessment,
    pub policy: PolicyDecision,
    pub retrieval: RetrievalResult,
    pub confidence: ConfidenceScore,
    pub decision: EligibilityDecision,
    pub response: Response,
    pub schema_version: String,
}

impl AuditRecord {
    /// Assemble a record from a completed stage trail.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        request_id: String,
        timestamp: DateTime<Utc>,
        user_query: String,
        embedding_model_override: Option<String>,
        risk: RiskAssessment,
        policy: PolicyDecision,
        retrieval: RetrievalResult,
        confidence: ConfidenceScore,
        decision: EligibilityDecision,
        response: Response,
    ) -> Self {
        Self {
            request_id,
            timestamp,
            user_query,
            embedding_model_override,
            risk,
            policy,
            retrieval,
            confidence,
            decision,
            response,
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
