//! # warden-core
//!
//! Foundation crate for the Warden decision pipeline.
//! Defines the per-request data model, traits for every pluggable seam,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WardenConfig;
pub use errors::{WardenError, WardenResult};
pub use models::{
    AuditRecord, ConfidenceScore, Decision, Document, EligibilityDecision, PolicyDecision,
    PolicyMode, ReasonCode, Response, RetrievalResult, RiskAssessment, RiskCategory, RiskLevel,
};
