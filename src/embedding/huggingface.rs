//! Hugging Face Inference API embedding provider.
//!
//! Implements [`EmbeddingProvider`] by POSTing `{"inputs", "options"}` to a
//! feature-extraction endpoint. A `503` means the model is still loading; the
//! provider waits once and retries. Responses may be a flat vector or a vector
//! nested one level deep (`[[...]]`).

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use super::{EmbeddingError, EmbeddingProvider};
use crate::config::EmbeddingConfig;

/// Status the inference API returns while a cold model is being loaded.
const MODEL_LOADING: StatusCode = StatusCode::SERVICE_UNAVAILABLE;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

/// Remote embedding provider backed by the Hugging Face Inference API.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    retry_backoff: Duration,
}

impl HuggingFaceProvider {
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        tracing::info!(
            url = %config.api_url,
            configured = config.is_configured(),
            "embedding provider ready"
        );

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.trim().to_string(),
            retry_backoff: Duration::from_secs(config.retry_backoff_secs),
        })
    }

    async fn post(&self, text: &str) -> Result<reqwest::Response, EmbeddingError> {
        let body = InferenceRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: true,
                use_cache: true,
            },
        };

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if self.api_key.is_empty() {
            return Err(EmbeddingError::NotConfigured);
        }

        let mut response = self.post(text).await?;

        if response.status() == MODEL_LOADING {
            tracing::warn!(
                backoff_secs = self.retry_backoff.as_secs_f32(),
                "embedding model loading, retrying once"
            );
            tokio::time::sleep(self.retry_backoff).await;
            response = self.post(text).await?;
        }

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %message, "embedding request failed");
            return Err(EmbeddingError::Provider {
                status: Some(status.as_u16()),
                message,
            });
        }

        let payload: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                EmbeddingError::Timeout
            } else {
                EmbeddingError::MalformedResponse(format!("invalid JSON: {e}"))
            }
        })?;

        parse_embedding(&payload)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn transport_error(e: reqwest::Error) -> EmbeddingError {
    if e.is_timeout() {
        EmbeddingError::Timeout
    } else {
        EmbeddingError::Provider {
            status: None,
            message: e.to_string(),
        }
    }
}

/// Extract a vector from `[f, f, ...]` or `[[f, f, ...]]`.
pub(crate) fn parse_embedding(payload: &Value) -> Result<Vec<f32>, EmbeddingError> {
    let outer = payload
        .as_array()
        .ok_or_else(|| EmbeddingError::MalformedResponse(format!("expected array, got {payload}")))?;

    let values = match outer.first() {
        Some(Value::Array(inner)) => inner,
        Some(_) => outer,
        None => return Err(EmbeddingError::MalformedResponse("empty array".into())),
    };

    values
        .iter()
        .map(|v| {
            v.as_f64().map(|f| f as f32).ok_or_else(|| {
                EmbeddingError::MalformedResponse(format!("non-numeric element: {v}"))
            })
        })
        .collect()
}
