//! Hosted inference endpoint client
//!
//! Talks to a Hugging Face style summarization endpoint serving
//! `facebook/bart-large-cnn`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};
use url::Url;

use super::model::{SummaryModel, SummaryParams};
use crate::core::config::AppConfig;
use crate::errors::ModelError;

const MAX_BACKOFF: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct SummaryCandidate {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Value,
    estimated_time: Option<f64>,
}

/// Client for the hosted summarization model.
pub struct InferenceClient {
    http: Client,
    endpoint: Url,
    api_token: Option<String>,
    max_retries: usize,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ModelError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ModelError::HttpError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.model_url.clone(),
            api_token: config.api_token.clone(),
            max_retries: config.max_retries,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request_once(&self, body: &Value) -> Result<String, ModelError> {
        let mut request = self.http.post(self.endpoint.clone()).json(body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!(status, bytes = text.len(), "Model endpoint responded");

        parse_response(status, &text)
    }
}

/// JSON payload for one summarization call.
#[must_use]
pub fn build_request_body(text: &str, params: &SummaryParams) -> Value {
    json!({
        "inputs": text,
        "parameters": {
            "min_length": params.min_length,
            "max_length": params.max_length,
            "do_sample": params.do_sample,
        },
        "options": {
            "wait_for_model": true,
        }
    })
}

/// Interprets an endpoint response.
///
/// Success bodies are `[{"summary_text": ...}, ...]`; the first candidate is
/// returned untouched. Error bodies are `{"error": ..., "estimated_time": ...}`.
///
/// # Errors
///
/// Returns an error for non-2xx statuses, error bodies, or unexpected shapes.
pub fn parse_response(status: u16, body: &str) -> Result<String, ModelError> {
    if !(200..300).contains(&status) {
        return Err(error_from_body(status, body));
    }

    let value: Value = serde_json::from_str(body)?;
    if value.get("error").is_some() {
        return Err(error_from_body(status, body));
    }

    let candidates: Vec<SummaryCandidate> = serde_json::from_value(value)?;
    candidates
        .into_iter()
        .next()
        .map(|candidate| candidate.summary_text)
        .ok_or(ModelError::EmptyOutput)
}

fn error_from_body(status: u16, body: &str) -> ModelError {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return ModelError::ApiError {
            status,
            message: body.trim().to_string(),
        };
    };

    let message = match parsed.error {
        Value::String(s) => s,
        other => other.to_string(),
    };

    if status == 503 {
        let message = match parsed.estimated_time {
            Some(secs) => format!("{message} (estimated {secs:.0}s)"),
            None => message,
        };
        return ModelError::Loading(message);
    }

    ModelError::ApiError { status, message }
}

#[async_trait]
impl SummaryModel for InferenceClient {
    fn name(&self) -> &str {
        "inference"
    }

    async fn summarize(&self, text: &str, params: &SummaryParams) -> Result<String, ModelError> {
        #[cfg(feature = "debug-logs")]
        debug!("Summarization input:\n{}", text);

        info!(
            endpoint = %self.endpoint,
            chars = text.chars().count(),
            "Requesting summary from inference endpoint"
        );

        let body = build_request_body(text, params);
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(250)
            .max_delay(MAX_BACKOFF)
            .map(jitter)
            .take(self.max_retries);

        RetryIf::spawn(
            strategy,
            || self.request_once(&body),
            |e: &ModelError| {
                let retry = e.is_transient();
                if retry {
                    warn!("Transient model error, retrying: {}", e);
                }
                retry
            },
        )
        .await
    }
}
