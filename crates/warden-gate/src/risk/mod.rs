//! Rule-based risk classification. Auditable by construction: every
//! verdict traces back to one named rule.

mod classifier;
pub mod patterns;

pub use classifier::{RiskClassifier, RiskRule};
