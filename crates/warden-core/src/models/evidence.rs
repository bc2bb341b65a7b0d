use serde::{Deserialize, Serialize};

/// Input to the generation collaborator: the query and the evidence it may
/// draw on, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceBundle {
    pub query: String,
    pub documents: Vec<String>,
    pub confidence: f64,
}
