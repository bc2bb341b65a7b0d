mod audit_config;
pub mod defaults;
mod embedding_config;
mod observability_config;
mod policy_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use audit_config::AuditConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ConfigError, WardenResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WardenConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub policy: PolicyConfig,
    pub audit: AuditConfig,
    pub observability: ObservabilityConfig,
}

impl WardenConfig {
    /// Parse a TOML document. Missing sections and fields take defaults.
    pub fn from_toml(toml_str: &str) -> WardenResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Validate cross-field invariants. Run once at startup.
    pub fn validate(&self) -> WardenResult<()> {
        self.policy.validate()?;
        if self.embedding.dimensions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding.dimensions".to_string(),
                reason: "must be > 0".to_string(),
            }
            .into());
        }
        if self.embedding.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding.timeout_ms".to_string(),
                reason: "must be > 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
