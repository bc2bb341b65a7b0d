mod audit_record;
mod confidence;
mod degradation_event;
mod document;
mod eligibility;
mod evidence;
mod policy;
mod response;
mod retrieval;
mod risk;

pub use audit_record::AuditRecord;
pub use confidence::ConfidenceScore;
pub use degradation_event::DegradationEvent;
pub use document::Document;
pub use eligibility::{Decision, EligibilityDecision, ReasonCode};
pub use evidence::EvidenceBundle;
pub use policy::{PolicyDecision, PolicyMode};
pub use response::Response;
pub use retrieval::RetrievalResult;
pub use risk::{RiskAssessment, RiskCategory, RiskLevel};
