use warden_core::models::EvidenceBundle;
use warden_core::traits::IGenerator;

/// Selection-only generator: answers with the top-ranked document verbatim.
///
/// Never adds text the evidence does not contain.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderGenerator;

impl IGenerator for PlaceholderGenerator {
    fn generate(&self, bundle: &EvidenceBundle) -> Option<String> {
        bundle.documents.first().cloned()
    }
}
