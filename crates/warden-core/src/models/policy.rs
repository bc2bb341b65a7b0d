use serde::{Deserialize, Serialize};

/// Label of a policy tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyMode {
    Strict,
    Conservative,
    Normal,
}

/// Confidence threshold and permissions attached to a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub mode: PolicyMode,
    /// Minimum confidence in [0, 1] required before generation.
    pub min_confidence: f64,
    pub retrieval_required: bool,
    pub generation_allowed: bool,
}
