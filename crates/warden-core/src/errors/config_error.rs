/// Construction-time configuration errors. Never raised per request.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown {kind} backend: {name}")]
    UnknownBackend { kind: String, name: String },

    #[error("{backend} backend requires credential in env var {variable}")]
    MissingCredential { backend: String, variable: String },

    #[error("{backend} backend requires a model identifier")]
    MissingModel { backend: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("config parse error: {reason}")]
    Parse { reason: String },
}
