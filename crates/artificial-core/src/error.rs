//! Unified error type exposed by **`artificial-core`**.
//!
//! Provider crates convert their internal errors into a single [`LlmError`]
//! before bubbling them up to the caller. The human-readable message is the
//! primary carrier of diagnostics; [`LlmErrorKind`] is an additive hint for
//! callers that want to branch without matching on strings.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LlmError>;

/// The one error kind every provider raises.
///
/// `Display` renders the message only, so the text seen by callers is
/// exactly what the provider produced.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LlmError {
    message: String,
    kind: LlmErrorKind,
}

/// Coarse classification of what went wrong.
///
/// The variants are informational. Two errors of the same kind may carry
/// very different messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LlmErrorKind {
    /// The provider answered with a non-success HTTP status.
    Status(u16),
    /// No connection to the provider could be established.
    Connect,
    /// The transport flagged the response status on its own.
    Transport,
    /// Anything else: timeouts, unreadable bodies, invalid JSON, …
    Other,
}

impl LlmError {
    pub fn new(message: impl Into<String>, kind: LlmErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Shorthand for an [`LlmErrorKind::Other`] error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::new(message, LlmErrorKind::Other)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> LlmErrorKind {
        self.kind
    }
}
