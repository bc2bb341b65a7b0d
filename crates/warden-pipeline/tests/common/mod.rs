#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use warden_audit::MemoryAuditSink;
use warden_core::config::WardenConfig;
use warden_core::errors::{AuditError, EmbeddingError, WardenResult};
use warden_core::models::AuditRecord;
use warden_core::traits::{IAuditSink, IEmbeddingEncoder};
use warden_embeddings::HashedEncoder;
use warden_pipeline::{Pipeline, PlaceholderGenerator};
use warden_retrieval::{KnowledgeBase, RetrievalEngine};

/// Pipeline over the baseline knowledge base with an in-memory audit sink.
pub fn memory_pipeline() -> (Pipeline, Arc<MemoryAuditSink>) {
    memory_pipeline_with(&WardenConfig::default())
}

pub fn memory_pipeline_with(config: &WardenConfig) -> (Pipeline, Arc<MemoryAuditSink>) {
    let encoder = warden_embeddings::create_encoder(&config.embedding).unwrap();
    let retrieval =
        RetrievalEngine::build(KnowledgeBase::baseline(), encoder, &config.retrieval).unwrap();
    pipeline_around(config, retrieval)
}

pub fn pipeline_around(
    config: &WardenConfig,
    retrieval: RetrievalEngine,
) -> (Pipeline, Arc<MemoryAuditSink>) {
    let sink = Arc::new(MemoryAuditSink::new());
    let pipeline = Pipeline::from_parts(
        config,
        retrieval,
        sink.clone(),
        Arc::new(PlaceholderGenerator),
    )
    .unwrap();
    (pipeline, sink)
}

/// Audit sink that always fails.
pub struct BrokenSink;

impl IAuditSink for BrokenSink {
    fn append(&self, _record: &AuditRecord) -> WardenResult<()> {
        Err(AuditError::WriteFailed {
            reason: "disk full".to_string(),
        }
        .into())
    }
    fn flush(&self) -> WardenResult<()> {
        Ok(())
    }
    fn name(&self) -> &str {
        "broken"
    }
}

/// Hashed encoder that can be switched into failure after indexing.
pub struct FlakyEncoder {
    inner: HashedEncoder,
    pub failing: AtomicBool,
}

impl FlakyEncoder {
    pub fn new() -> Self {
        Self {
            inner: HashedEncoder::new(384, None),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn recover(&self) {
        self.failing.store(false, Ordering::SeqCst);
    }
}

impl IEmbeddingEncoder for FlakyEncoder {
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(EmbeddingError::Timeout { timeout_ms: 2000 }.into());
        }
        self.inner.encode(texts)
    }
    fn dimensions(&self) -> usize {
        384
    }
    fn name(&self) -> &str {
        "flaky"
    }
    fn model_id(&self) -> &str {
        "flaky-v1"
    }
    fn is_available(&self) -> bool {
        true
    }
}
