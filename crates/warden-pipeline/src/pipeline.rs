//! Pipeline: owns every stage and the audit sink, runs requests end to end.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;
use warden_core::config::WardenConfig;
use warden_core::errors::{ConfigError, WardenError, WardenResult};
use warden_core::models::{AuditRecord, EvidenceBundle, Response};
use warden_core::traits::{IAuditSink, IGenerator};
use warden_gate::risk::patterns;
use warden_gate::{EligibilityGate, PolicyResolver, RiskClassifier};
use warden_observability::tracing_setup::events;
use warden_observability::{
    audit_span, request_span, retrieval_span, DecisionMetrics, DegradationTracker,
};
use warden_retrieval::engine::DEGRADATION_COMPONENT;
use warden_retrieval::{ConfidenceScorer, KnowledgeBase, QueryEncoder, RetrievalEngine};

use crate::generator::PlaceholderGenerator;
use crate::overrides::OverrideEncoders;

/// The request orchestrator.
///
/// Constructed once at startup and shared by reference (`&Pipeline` or
/// `Arc<Pipeline>`) across concurrent requests. The knowledge base and
/// vector index are immutable; the audit sink serializes its own writers.
pub struct Pipeline {
    classifier: RiskClassifier,
    resolver: PolicyResolver,
    retrieval: RetrievalEngine,
    scorer: ConfidenceScorer,
    gate: EligibilityGate,
    generator: Arc<dyn IGenerator>,
    audit: Arc<dyn IAuditSink>,
    overrides: OverrideEncoders,
    metrics: DecisionMetrics,
    degradations: Mutex<DegradationTracker>,
}

impl Pipeline {
    /// Build every component from `config`.
    ///
    /// # Errors
    /// Any `ConfigError`, a knowledge base that fails to load, or an audit
    /// sink that cannot be opened. Nothing is deferred to request time.
    pub fn new(config: &WardenConfig) -> WardenResult<Self> {
        config.validate()?;
        let kb = KnowledgeBase::load(config.retrieval.knowledge_base_path.as_deref())?;
        let encoder = warden_embeddings::create_encoder(&config.embedding)?;
        let retrieval = RetrievalEngine::build(kb, encoder, &config.retrieval)?;
        let audit = warden_audit::create_sink(&config.audit)?;
        Self::from_parts(config, retrieval, audit, Arc::new(PlaceholderGenerator))
    }

    /// Assemble around pre-built retrieval, audit, and generation components.
    pub fn from_parts(
        config: &WardenConfig,
        retrieval: RetrievalEngine,
        audit: Arc<dyn IAuditSink>,
        generator: Arc<dyn IGenerator>,
    ) -> WardenResult<Self> {
        config.policy.validate()?;
        let broken = patterns::failed_patterns();
        if !broken.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "risk patterns".to_string(),
                reason: format!("failed to compile: {}", broken.join(", ")),
            }
            .into());
        }

        let index_dimensions = retrieval.index().map(|i| i.dimensions());
        info!(
            documents = retrieval.knowledge_base().len(),
            indexed = index_dimensions.is_some(),
            audit = audit.name(),
            "pipeline ready"
        );

        Ok(Self {
            classifier: RiskClassifier::new(),
            resolver: PolicyResolver::new(config.policy),
            retrieval,
            scorer: ConfidenceScorer::new(),
            gate: EligibilityGate::new(),
            generator,
            audit,
            overrides: OverrideEncoders::new(config.embedding.clone(), index_dimensions),
            metrics: DecisionMetrics::new(),
            degradations: Mutex::new(DegradationTracker::new()),
        })
    }

    /// Run one request through every stage and record it.
    ///
    /// # Errors
    /// `WardenError::AuditUnavailable` if the audit record cannot be written;
    /// the response is withheld in that case. No other stage can fail.
    pub fn handle(
        &self,
        query: &str,
        embedding_model_override: Option<&str>,
    ) -> WardenResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        let timestamp = Utc::now();
        let span = request_span!(request_id);
        let _guard = span.enter();

        let risk = self.classifier.classify(query);
        let policy = self.resolver.resolve(risk.level);
        debug!(mode = ?policy.mode, min_confidence = policy.min_confidence, "policy resolved");

        let resolved_override = embedding_model_override.map(|m| self.overrides.resolve(m));
        let encoder = match &resolved_override {
            None => QueryEncoder::Index,
            Some(Ok(encoder)) => QueryEncoder::Override(encoder.as_ref()),
            Some(Err(reason)) => QueryEncoder::Unavailable {
                reason: reason.clone(),
            },
        };
        let outcome = {
            let encoder_name = embedding_model_override.unwrap_or("index");
            let _retrieval = retrieval_span!(encoder_name).entered();
            self.retrieval.retrieve_with(query, &policy, encoder)
        };
        match outcome.degradation {
            Some(event) => {
                self.metrics.record_degradation();
                if let Ok(mut tracker) = self.degradations.lock() {
                    tracker.record(event);
                }
            }
            None if outcome.result.reranked => {
                if let Ok(mut tracker) = self.degradations.lock() {
                    if !tracker.is_empty() {
                        tracker.mark_recovered(DEGRADATION_COMPONENT);
                    }
                }
            }
            None => {}
        }
        let retrieval = outcome.result;

        let confidence = self.scorer.score(&retrieval);
        let decision = self.gate.evaluate(&policy, &confidence);
        self.metrics.record_decision(&decision);
        events::decision_made(&risk, &decision, confidence.score);

        let answer = if decision.is_allowed() {
            self.generator.generate(&EvidenceBundle {
                query: query.to_string(),
                documents: retrieval.documents.clone(),
                confidence: confidence.score,
            })
        } else {
            None
        };

        let response = Response {
            request_id: request_id.clone(),
            status: decision.decision,
            message: decision.reason.clone(),
            answer,
        };

        let record = AuditRecord::new(
            request_id.clone(),
            timestamp,
            query.to_string(),
            embedding_model_override.map(str::to_string),
            risk,
            policy,
            retrieval,
            confidence,
            decision,
            response.clone(),
        );
        let appended = {
            let _audit = audit_span!(self.audit.name()).entered();
            self.audit.append(&record)
        };
        if let Err(e) = appended {
            self.metrics.record_audit_failure();
            events::audit_failed(&request_id, &e.to_string());
            return Err(WardenError::AuditUnavailable {
                request_id,
                reason: e.to_string(),
            });
        }

        Ok(response)
    }

    pub fn metrics(&self) -> &DecisionMetrics {
        &self.metrics
    }

    /// Copy of the degradation log.
    pub fn degradations(&self) -> DegradationTracker {
        self.degradations
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    pub fn retrieval(&self) -> &RetrievalEngine {
        &self.retrieval
    }

    /// Flush the audit sink. Call before shutdown.
    pub fn flush(&self) -> WardenResult<()> {
        self.audit.flush()
    }
}
