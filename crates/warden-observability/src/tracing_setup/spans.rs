//! Span definitions for the pipeline stages.

/// Root span of one `handle` call.
#[macro_export]
macro_rules! request_span {
    ($request_id:expr) => {
        tracing::info_span!("warden.request", request_id = %$request_id)
    };
}

/// Retrieval span, tagged with the encoder in use.
#[macro_export]
macro_rules! retrieval_span {
    ($encoder:expr) => {
        tracing::debug_span!("warden.retrieval", encoder = %$encoder)
    };
}

/// Audit append span.
#[macro_export]
macro_rules! audit_span {
    ($sink:expr) => {
        tracing::debug_span!("warden.audit", sink = %$sink)
    };
}
