//! HTTP client for an external `/embed/batch` embedding service.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::EmbedError;
use crate::provider::EmbeddingProvider;
use crate::settings::EmbedSettings;

#[derive(Deserialize)]
struct EmbedBatchResponse {
    vectors: Option<Vec<Vec<f32>>>,
}

/// Embedding client for `POST {base_url}/embed/batch`.
///
/// Sends `{"texts": [...]}` (plus a `"model"` hint when configured) with
/// bearer authentication and expects `{"vectors": [[f32, ...], ...]}` back.
/// No retries happen at this layer; failures propagate to the caller.
#[derive(Debug)]
pub struct HttpEmbeddingClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: Option<String>,
}

impl HttpEmbeddingClient {
    /// Default request timeout when the settings carry none.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Build a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::Config`] when the endpoint URL or the API key is
    /// missing. This is the fatal pre-computation check for credentials.
    pub fn from_settings(settings: &EmbedSettings) -> Result<Self, EmbedError> {
        let base_url = settings
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                EmbedError::Config("no endpoint URL (set TEAMMATCH_EMBED_URL)".to_string())
            })?;
        let api_key = settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                EmbedError::Config("no API key (set TEAMMATCH_EMBED_API_KEY)".to_string())
            })?;
        Ok(Self::new(
            base_url,
            api_key,
            settings.model.clone(),
            settings.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS),
        ))
    }

    /// Build a client directly from endpoint parameters.
    #[must_use]
    pub fn new(base_url: &str, api_key: &str, model: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingClient {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let started = Instant::now();
        let url = format!("{}/embed/batch", self.base_url);
        let mut body = serde_json::json!({ "texts": texts });
        if let Some(model) = self.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            body["model"] = serde_json::Value::String(model.to_string());
        }
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|error| {
                tracing::debug!(
                    event = "embed.http.request_failed",
                    url,
                    elapsed_ms = started.elapsed().as_millis(),
                    error = %error,
                    "embedding request failed"
                );
            })?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(
                event = "embed.http.non_success_status",
                status = %status,
                elapsed_ms = started.elapsed().as_millis(),
                "embedding service returned non-success status"
            );
            return Err(EmbedError::Status(status));
        }
        let data: EmbedBatchResponse = resp.json().await.map_err(|error| {
            tracing::debug!(
                event = "embed.http.decode_failed",
                elapsed_ms = started.elapsed().as_millis(),
                error = %error,
                "embedding response decode failed"
            );
            EmbedError::Decode(error.to_string())
        })?;
        let vectors = data
            .vectors
            .ok_or_else(|| EmbedError::Decode("response carried no vectors".to_string()))?;
        if vectors.len() != texts.len() {
            return Err(EmbedError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }
        tracing::debug!(
            event = "embed.http.completed",
            vector_count = vectors.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "embedding batch completed"
        );
        Ok(vectors)
    }
}
