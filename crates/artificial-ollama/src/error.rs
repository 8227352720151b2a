use artificial_core::error::{LlmError, LlmErrorKind};
use reqwest::StatusCode;

const CONNECT_ERROR_MESSAGE: &str =
    "Ollama is likely not running. Start Ollama by running `ollama serve` on your host.";

/// Every failure mode the Ollama client can hit.
///
/// Callers only ever see these as [`LlmError`]; the conversion below decides
/// the message text.
#[derive(Debug, thiserror::Error)]
pub enum OllamaError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t (de)serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Ollama request failed with status {}: {detail}", .status.as_u16())]
    Api { status: StatusCode, detail: String },

    #[error("Ollama format error: {0}")]
    Format(String),
}

impl From<OllamaError> for LlmError {
    fn from(value: OllamaError) -> Self {
        match value {
            OllamaError::Api { status, .. } => {
                LlmError::new(value.to_string(), LlmErrorKind::Status(status.as_u16()))
            }
            OllamaError::Http(err) if err.is_connect() && !err.is_timeout() => LlmError::new(
                format!("Connection failed: {CONNECT_ERROR_MESSAGE}"),
                LlmErrorKind::Connect,
            ),
            OllamaError::Http(err) if err.is_status() => LlmError::new(
                format!("Ollama request failed: {err}"),
                LlmErrorKind::Transport,
            ),
            OllamaError::Http(err) => LlmError::other(format!("An error occurred: {err}")),
            OllamaError::Serde(err) => LlmError::other(format!("An error occurred: {err}")),
            err @ OllamaError::Format(_) => LlmError::other(format!("An error occurred: {err}")),
        }
    }
}
