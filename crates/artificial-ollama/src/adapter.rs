use std::{env, sync::Arc, time::Duration};

use artificial_core::error::Result;
use serde::Deserialize;

use crate::client::OllamaClient;

pub const API_URL_ENV: &str = "OLLAMA_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:11434";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wires the HTTP client [`OllamaClient`] into a value that implements
/// [`artificial_core::provider::ChatCompletionProvider`].
///
/// The adapter holds no mutable state. Share it behind an `Arc` (or wrap it
/// in an [`artificial_core::ArtificialClient`]) to call it from many tasks.
#[derive(Debug)]
pub struct OllamaAdapter {
    pub(crate) client: Arc<OllamaClient>,
    timeout: Duration,
}

impl OllamaAdapter {
    /// Construct from a deserialized [`OllamaConfig`]. Without an `api_url`
    /// the `OLLAMA_API_URL` environment variable is used, then the default.
    pub fn from_config(config: OllamaConfig) -> Result<Self> {
        let mut builder = OllamaAdapterBuilder::new();
        builder.api_url = Some(resolve_base_url(config.api_url, env::var(API_URL_ENV).ok()));
        // negative or non-finite seconds fall back to the default
        builder.timeout = config
            .timeout
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok());
        builder.build()
    }

    /// Resolved base URL, as configured (trailing slashes intact).
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Plain configuration record, e.g. loaded from a JSON or TOML section.
///
/// ```rust
/// use artificial_ollama::OllamaConfig;
///
/// let cfg: OllamaConfig =
///     serde_json::from_str(r#"{ "api_url": "http://gpu-box:11434", "timeout": 120 }"#).unwrap();
/// assert_eq!(cfg.timeout, Some(120.0));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OllamaConfig {
    pub api_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<f64>,
}

/// Builder for [`OllamaAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use artificial_ollama::OllamaAdapterBuilder;
///
/// let backend = OllamaAdapterBuilder::new_from_env()
///     .build()
///     .expect("reqwest client");
/// ```
///
/// Nothing is validated: a bogus URL only shows up once a request fails.
#[derive(Debug, Default)]
pub struct OllamaAdapterBuilder {
    pub(crate) api_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl OllamaAdapterBuilder {
    /// Create an *empty* builder. Without [`Self::with_api_url`] it targets
    /// `http://localhost:11434`; the environment is not consulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that pins the URL from the `OLLAMA_API_URL`
    /// environment variable right away, if it is set.
    pub fn new_from_env() -> Self {
        Self {
            api_url: env::var(API_URL_ENV).ok(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// Only if the underlying `reqwest` client cannot be created (e.g. the TLS
    /// backend fails to initialise).
    pub fn build(self) -> Result<OllamaAdapter> {
        let url = resolve_base_url(self.api_url, None);
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = OllamaClient::new(url, timeout)?;

        Ok(OllamaAdapter {
            client: Arc::new(client),
            timeout,
        })
    }
}

/// Explicit value, then environment, then `http://localhost:11434`.
/// Empty strings count as unset.
pub(crate) fn resolve_base_url(explicit: Option<String>, from_env: Option<String>) -> String {
    explicit
        .filter(|url| !url.is_empty())
        .or_else(|| from_env.filter(|url| !url.is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
}
