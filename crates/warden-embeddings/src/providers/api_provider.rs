//! Remote embedding API encoder.
//!
//! Speaks the OpenAI-compatible `/v1/embeddings` protocol, which most hosted
//! embedding services accept. One request per `encode` call, no retries: a
//! failed or slow call surfaces as an error and retrieval degrades.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::{debug, warn};
use warden_core::errors::{EmbeddingError, WardenResult};
use warden_core::traits::IEmbeddingEncoder;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";

/// HTTP embedding encoder.
pub struct ApiProvider {
    model_id: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    timeout_ms: u64,
    client: reqwest::Client,
    runtime: Runtime,
    /// Cleared when the endpoint rejects the credential.
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    index: Option<usize>,
    embedding: Vec<f32>,
}

impl ApiProvider {
    /// Build a provider with its own current-thread runtime and pooled client.
    pub fn new(
        model_id: String,
        api_key: String,
        endpoint: Option<String>,
        dimensions: usize,
        timeout_ms: u64,
    ) -> WardenResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("api: runtime error: {e}"),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("api: client error: {e}"),
            })?;

        Ok(Self {
            model_id,
            api_key,
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            dimensions,
            timeout_ms,
            client,
            runtime,
            available: AtomicBool::new(true),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Mark the provider usable again, e.g. after rotating the credential.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }

    fn request_embeddings(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        if !self.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: format!("api:{}", self.model_id),
            }
            .into());
        }
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let body = EmbedRequest {
            model: &self.model_id,
            input: texts,
        };
        debug!(model = %self.model_id, count = texts.len(), "requesting embeddings");

        let mut data = self.runtime.block_on(async {
            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
            {
                warn!(%status, "embedding API rejected credential");
                self.available.store(false, Ordering::Relaxed);
            }
            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("API returned {status}: {text}"),
                });
            }

            response
                .json::<EmbedResponse>()
                .await
                .map(|r| r.data)
                .map_err(|e| self.transport_error(e))
        })?;

        if data.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("expected {} embeddings, got {}", texts.len(), data.len()),
            }
            .into());
        }

        // Providers may return items out of order; `index` is authoritative.
        data.sort_by_key(|d| d.index.unwrap_or(usize::MAX));

        data.into_iter()
            .map(|d| {
                if d.embedding.len() != self.dimensions {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected: self.dimensions,
                        actual: d.embedding.len(),
                    }
                    .into());
                }
                Ok(d.embedding)
            })
            .collect()
    }

    fn transport_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else {
            EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            }
        }
    }
}

impl IEmbeddingEncoder for ApiProvider {
    fn encode(&self, texts: &[String]) -> WardenResult<Vec<Vec<f32>>> {
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "api"
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
