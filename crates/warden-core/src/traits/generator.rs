use crate::models::EvidenceBundle;

/// Answer generation, invoked only for `ALLOW` decisions.
pub trait IGenerator: Send + Sync {
    /// Produce an answer from the evidence, or `None` if there is nothing to say.
    fn generate(&self, bundle: &EvidenceBundle) -> Option<String>;
}
