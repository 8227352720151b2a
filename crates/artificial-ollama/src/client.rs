use std::time::Duration;

use reqwest::{
    Client as HttpClient, StatusCode,
    header::{CONTENT_TYPE, HeaderValue},
};
use serde_json::Value;

use crate::{
    api::{CHAT_ENDPOINT, ChatRequest, error_detail},
    error::OllamaError,
};

/// Minimal HTTP client for Ollama’s `/api/chat` endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Returns the raw JSON body; normalization happens in the provider impl.
/// * Shares a single `reqwest::Client`, so cloning `OllamaClient` is cheap.
#[derive(Clone, Debug)]
pub struct OllamaClient {
    http: HttpClient,
    base: String,
}

impl OllamaClient {
    /// Build a client whose requests are bounded by `timeout` end to end.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, OllamaError> {
        let http = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::with_http(base_url, http))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(base_url: impl Into<String>, http: HttpClient) -> Self {
        Self {
            http,
            base: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Full URL of the chat endpoint. Trailing slashes on the base are dropped.
    pub fn chat_url(&self) -> String {
        format!("{}{CHAT_ENDPOINT}", self.base.trim_end_matches('/'))
    }

    /// Perform a **non-streaming** chat completion and return the raw body.
    pub async fn chat(&self, request: &ChatRequest) -> Result<Value, OllamaError> {
        let payload = request.to_payload()?;
        let url = self.chat_url();

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, model = %request.model, "sending Ollama chat request");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&payload)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let body = resp.text().await?;
            return Err(OllamaError::Api {
                status,
                detail: error_detail(&body),
            });
        }

        let resp = resp.error_for_status()?;
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
