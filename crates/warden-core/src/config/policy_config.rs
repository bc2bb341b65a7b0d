use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, WardenResult};

/// Confidence thresholds for the three policy tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub high_min_confidence: f64,
    pub medium_min_confidence: f64,
    pub low_min_confidence: f64,
}

impl PolicyConfig {
    /// Thresholds must lie in (0, 1] and never decrease as risk rises.
    ///
    /// A zero threshold would let a request with no evidence through the gate.
    pub fn validate(&self) -> WardenResult<()> {
        let tiers = [
            ("policy.high_min_confidence", self.high_min_confidence),
            ("policy.medium_min_confidence", self.medium_min_confidence),
            ("policy.low_min_confidence", self.low_min_confidence),
        ];
        for (field, value) in tiers {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be in (0, 1], got {value}"),
                }
                .into());
            }
        }
        if self.low_min_confidence > self.medium_min_confidence
            || self.medium_min_confidence > self.high_min_confidence
        {
            return Err(ConfigError::InvalidValue {
                field: "policy".to_string(),
                reason: format!(
                    "thresholds must not decrease with risk, got low={} medium={} high={}",
                    self.low_min_confidence, self.medium_min_confidence, self.high_min_confidence
                ),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            high_min_confidence: defaults::DEFAULT_HIGH_MIN_CONFIDENCE,
            medium_min_confidence: defaults::DEFAULT_MEDIUM_MIN_CONFIDENCE,
            low_min_confidence: defaults::DEFAULT_LOW_MIN_CONFIDENCE,
        }
    }
}
