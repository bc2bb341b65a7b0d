//! # warden-gate
//!
//! The deterministic decision stages. Pure, total functions with no I/O:
//!
//! ```text
//! query ──► RiskClassifier ──► PolicyResolver ──► (retrieval, scoring) ──► EligibilityGate
//!           ordered lexical     3-tier table                              two ordered guards
//!           rules
//! ```

pub mod eligibility;
pub mod policy;
pub mod risk;

pub use eligibility::EligibilityGate;
pub use policy::PolicyResolver;
pub use risk::RiskClassifier;
