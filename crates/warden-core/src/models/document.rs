use serde::{Deserialize, Serialize};

/// An evidentiary document in the knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub source: String,
    /// Curator-assigned trust in [0, 1].
    pub reliability: f64,
}
