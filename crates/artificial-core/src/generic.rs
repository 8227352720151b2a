//! Generic message, role and response types used by the *artificial-core*
//! crate.
//!
//! They deliberately mirror the concepts exposed by most provider APIs:
//! “system”, “user”, “assistant”, and “tool”.  By staying minimal and
//! provider-agnostic we can:
//!
//! * convert them into provider-specific wire values via a simple `From`,
//! * hand every provider the same normalized [`ChatCompletionResponse`], and
//! * use them in unit tests without mocking a full transport layer.
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lightweight container representing a single chat message that is
/// independent of any specific LLM provider.
///
/// * `content` – the raw UTF-8 content.
/// * `role` – see [`GenericRole`] for permitted values.
/// * `tool_calls` – provider-shaped tool-call structure, forwarded as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericMessage {
    pub role: GenericRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl GenericMessage {
    /// Convenience constructor mirroring the field order used by common HTTP
    /// APIs (`role`, then `content`).
    ///
    /// ```rust
    /// use artificial_core::generic::{GenericMessage, GenericRole};
    ///
    /// let sys = GenericMessage::new("You are a helpful bot.".into(),
    ///                               GenericRole::System);
    /// ```
    pub fn new(message: String, role: GenericRole) -> Self {
        Self {
            role,
            content: Some(message),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn with_name(mut self, name: impl ToString) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Value) -> Self {
        self.tool_calls = Some(tool_calls);
        self
    }

    pub fn with_tool_call_id(mut self, tool_call_id: impl ToString) -> Self {
        self.tool_call_id = Some(tool_call_id.to_string());
        self
    }
}

/// Providers that forward messages verbatim take `serde_json::Value`; this
/// lets callers keep using [`GenericMessage`] with them.
impl From<GenericMessage> for Value {
    fn from(value: GenericMessage) -> Self {
        let mut map = Map::new();
        map.insert("role".into(), Value::String(value.role.to_string()));
        if let Some(content) = value.content {
            map.insert("content".into(), Value::String(content));
        }
        if let Some(name) = value.name {
            map.insert("name".into(), Value::String(name));
        }
        if let Some(tool_calls) = value.tool_calls {
            map.insert("tool_calls".into(), tool_calls);
        }
        if let Some(tool_call_id) = value.tool_call_id {
            map.insert("tool_call_id".into(), Value::String(tool_call_id));
        }
        Value::Object(map)
    }
}

/// High-level chat roles recognised by most LLM providers.
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON without extra mapping logic.
#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GenericRole {
    /// “System” messages define global behaviour and style guidelines.
    System,
    /// Messages produced by the assistant / model.
    Assistant,
    /// Messages originating from the human user.
    User,
    /// Special role used when a **tool call** result is injected into the
    /// conversation.
    Tool,
}

impl Display for GenericRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericRole::System => write!(f, "system"),
            GenericRole::Assistant => write!(f, "assistant"),
            GenericRole::User => write!(f, "user"),
            GenericRole::Tool => write!(f, "tool"),
        }
    }
}

/// Normalized reply every provider hands back, regardless of its own wire
/// schema.
///
/// `Default` yields exactly one empty choice, which providers then fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

impl Default for ChatCompletionResponse {
    fn default() -> Self {
        Self {
            choices: vec![Choice::default()],
        }
    }
}

impl ChatCompletionResponse {
    /// The message of the first (and for most providers only) choice.
    pub fn message(&self) -> Option<&ChoiceMessage> {
        self.choices.first().map(|choice| &choice.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// Assistant message inside a [`Choice`].
///
/// `tool_calls` is `None` when the provider did not report any. It is never
/// defaulted to an empty list, so presence can be used to detect tool use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Value>,
}
