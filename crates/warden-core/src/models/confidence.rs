use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounded confidence in the retrieved evidence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub score: f64,
}

impl ConfidenceScore {
    pub fn new(score: f64) -> Self {
        Self { score }
    }

    pub fn zero() -> Self {
        Self { score: 0.0 }
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.score)
    }
}
