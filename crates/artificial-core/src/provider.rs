use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Result, generic::ChatCompletionResponse};

/// A **provider** turns a chat request into a network call to a concrete
/// backend (Ollama, OpenAI, Anthropic, …) and normalizes the reply.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_completions_create`, which performs a
///   *single* non-streaming round-trip and returns a
///   [`ChatCompletionResponse`].
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay usable without
/// pulling in `async_trait`.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat request and normalize the provider’s reply.
    fn chat_completions_create<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<ChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// Stop condition(s) for generation. Serialized as a bare string or as a
/// list, matching what was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopSequence {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for StopSequence {
    fn from(value: &str) -> Self {
        StopSequence::Single(value.to_owned())
    }
}

impl From<String> for StopSequence {
    fn from(value: String) -> Self {
        StopSequence::Single(value)
    }
}

impl From<Vec<String>> for StopSequence {
    fn from(value: Vec<String>) -> Self {
        StopSequence::Many(value)
    }
}

/// Everything a provider needs for one chat completion.
///
/// The generation knobs most local backends understand get a named field.
/// Anything else goes into `extra`, which providers merge into their request
/// body **last**. Providers may route well-known keys found in `extra` (e.g.
/// `temperature`) to where their API expects them; a named field always wins
/// over an `extra` entry of the same name.
#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub model: String,
    pub messages: Vec<M>,
    /// Tool definitions, passed to the provider verbatim.
    pub tools: Option<Vec<Value>>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub seed: Option<i64>,
    pub stop: Option<StopSequence>,
    pub num_predict: Option<i64>,
    pub top_k: Option<i64>,
    pub extra: Map<String, Value>,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(model: impl Into<String>, messages: Vec<M>) -> Self {
        Self {
            model: model.into(),
            messages,
            tools: None,
            temperature: None,
            top_p: None,
            seed: None,
            stop: None,
            num_predict: None,
            top_k: None,
            extra: Map::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<Value>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stop(mut self, stop: impl Into<StopSequence>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    pub fn with_num_predict(mut self, num_predict: i64) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    pub fn with_top_k(mut self, top_k: i64) -> Self {
        self.top_k = Some(top_k);
        self
    }

    /// Add a provider-specific top-level field (e.g. `keep_alive`, `format`).
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stop_sequence_serializes_in_supplied_shape() {
        assert_eq!(
            serde_json::to_value(StopSequence::from("\n")).unwrap(),
            json!("\n")
        );
        assert_eq!(
            serde_json::to_value(StopSequence::from(vec!["a".to_string(), "b".to_string()]))
                .unwrap(),
            json!(["a", "b"])
        );
    }

    #[test]
    fn later_extra_overrides_earlier_extra() {
        let params = ChatCompleteParameters::<Value>::new("llama3", vec![])
            .with_extra("keep_alive", "5m")
            .with_extra("keep_alive", "10m");
        assert_eq!(params.extra.get("keep_alive"), Some(&json!("10m")));
    }
}
