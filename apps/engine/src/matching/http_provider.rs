//! HTTP embedding provider for OpenAI-compatible `/v1/embeddings` endpoints
//! (hosted APIs, or a local sentence-transformers server exposing the same shape).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::errors::{EmbeddingError, EngineError};
use crate::matching::embedding::EmbeddingProvider;

const EMBEDDINGS_PATH: &str = "/v1/embeddings";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct HttpEmbeddingProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    backoff_base: Duration,
}

impl HttpEmbeddingProvider {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), EMBEDDINGS_PATH),
            api_key,
            model: model.into(),
            backoff_base: Duration::from_millis(1000),
        })
    }

    /// `None` when no embedding URL is configured.
    pub fn from_config(config: &EngineConfig) -> Result<Option<Self>, EngineError> {
        config
            .embedding_api_url
            .as_deref()
            .map(|url| {
                Self::new(
                    url,
                    config.embedding_api_key.clone(),
                    config.embedding_model.clone(),
                    config.embed_timeout,
                )
            })
            .transpose()
    }

    /// Overrides the first retry delay (doubled on every further attempt).
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    /// Retries on 429 and 5xx with exponential backoff; other failures return immediately.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let mut last_error: Option<EmbeddingError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.backoff_base * (1 << (attempt - 1));
                warn!(
                    "Embedding call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.post(&self.endpoint).json(&body);
            if let Some(key) = &self.api_key {
                request = request.bearer_auth(key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbeddingError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 {
                warn!("Embedding API rate limited the request");
                last_error = Some(EmbeddingError::RateLimited {
                    retries: MAX_RETRIES,
                });
                continue;
            }

            if status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Embedding API returned {}: {}", status, body);
                last_error = Some(EmbeddingError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(EmbeddingError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let raw = response.text().await?;
            let parsed: EmbeddingResponse = serde_json::from_str(&raw)?;
            let embedding = parsed
                .data
                .into_iter()
                .next()
                .map(|d| d.embedding)
                .filter(|v| !v.is_empty())
                .ok_or(EmbeddingError::EmptyEmbedding)?;

            debug!("Embedded {} chars into {} dimensions", text.len(), embedding.len());
            return Ok(embedding);
        }

        Err(last_error
            .unwrap_or_else(|| EmbeddingError::Provider("no embedding attempt was made".into())))
    }

    fn name(&self) -> &str {
        &self.model
    }
}
