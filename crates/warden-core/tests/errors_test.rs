use warden_core::errors::*;

#[test]
fn unknown_backend_carries_kind_and_name() {
    let err = ConfigError::UnknownBackend {
        kind: "embedding".into(),
        name: "quantum".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("embedding"));
    assert!(msg.contains("quantum"));
}

#[test]
fn missing_credential_names_the_variable() {
    let err = ConfigError::MissingCredential {
        backend: "api".into(),
        variable: "WARDEN_EMBEDDING_API_KEY".into(),
    };
    assert!(err.to_string().contains("WARDEN_EMBEDDING_API_KEY"));
}

#[test]
fn audit_unavailable_carries_request_id() {
    let err = WardenError::AuditUnavailable {
        request_id: "req-42".into(),
        reason: "disk full".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("req-42"));
    assert!(msg.contains("disk full"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_warden_error() {
    let err: WardenError = ConfigError::MissingModel {
        backend: "api".into(),
    }
    .into();
    assert!(matches!(err, WardenError::ConfigError(_)));
}

#[test]
fn embedding_error_converts_to_warden_error() {
    let err: WardenError = EmbeddingError::Timeout { timeout_ms: 50 }.into();
    assert!(matches!(err, WardenError::EmbeddingError(_)));
    assert!(err.to_string().contains("50ms"));
}

#[test]
fn audit_error_converts_to_warden_error() {
    let err: WardenError = AuditError::LockPoisoned.into();
    assert!(matches!(err, WardenError::AuditError(_)));
}

#[test]
fn knowledge_error_converts_to_warden_error() {
    let err: WardenError = KnowledgeError::DuplicateId { id: "ai_001".into() }.into();
    assert!(matches!(err, WardenError::KnowledgeError(_)));
    assert!(err.to_string().contains("ai_001"));
}
