//! Wire types for Ollama’s `/api/chat` endpoint.
use artificial_core::{
    generic::{ChatCompletionResponse, ChoiceMessage},
    provider::{ChatCompleteParameters, StopSequence},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::OllamaError;

pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Keys Ollama only honours inside the nested `options` object.
pub const OPTION_KEYS: [&str; 6] = ["temperature", "top_p", "seed", "stop", "num_predict", "top_k"];

/// Generation parameters Ollama expects under the nested `options` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_predict: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    /// Option values that arrived through the passthrough map, kept verbatim.
    #[serde(flatten)]
    pub untyped: Map<String, Value>,
}

impl ChatOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn is_set(&self, key: &str) -> bool {
        match key {
            "temperature" => self.temperature.is_some(),
            "top_p" => self.top_p.is_some(),
            "seed" => self.seed.is_some(),
            "stop" => self.stop.is_some(),
            "num_predict" => self.num_predict.is_some(),
            "top_k" => self.top_k.is_some(),
            _ => self.untyped.contains_key(key),
        }
    }
}

/// Body of a non-streaming chat request.
///
/// `extra` is not serialized with the struct; [`ChatRequest::to_payload`]
/// merges it on top so its keys overwrite any field of the same name.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Value>,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChatOptions>,
    #[serde(skip)]
    pub extra: Map<String, Value>,
}

impl ChatRequest {
    pub fn new(model: String, messages: Vec<Value>) -> Self {
        Self {
            model,
            messages,
            stream: false,
            tools: None,
            options: None,
            extra: Map::new(),
        }
    }

    /// Final JSON body: typed fields first, then every `extra` entry.
    pub fn to_payload(&self) -> serde_json::Result<Value> {
        let mut payload = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut payload {
            for (key, value) in &self.extra {
                map.insert(key.clone(), value.clone());
            }
        }
        Ok(payload)
    }
}

/// `tools` and the option keys are pulled out of `extra` so they always land
/// where Ollama reads them. A named field wins over an `extra` entry with the
/// same key.
impl<M> From<ChatCompleteParameters<M>> for ChatRequest
where
    M: Into<Value> + Clone,
{
    fn from(value: ChatCompleteParameters<M>) -> Self {
        let mut extra = value.extra;
        let mut options = ChatOptions {
            temperature: value.temperature,
            top_p: value.top_p,
            seed: value.seed,
            stop: value.stop,
            num_predict: value.num_predict,
            top_k: value.top_k,
            untyped: Map::new(),
        };

        for key in OPTION_KEYS {
            let Some(raw) = extra.remove(key) else {
                continue;
            };
            if !options.is_set(key) {
                options.untyped.insert(key.to_owned(), raw);
            }
        }

        let untyped_tools = extra.remove("tools");
        let tools = value.tools.map(Value::Array).or(untyped_tools);

        Self {
            model: value.model,
            messages: value.messages.into_iter().map(Into::into).collect(),
            stream: false,
            tools,
            options: (!options.is_empty()).then_some(options),
            extra,
        }
    }
}

/// Map a raw `/api/chat` reply onto the shared response shape.
///
/// A missing `message` counts as empty, missing or `null` `content` becomes
/// `""`, and `tool_calls` is copied only when the upstream message has that
/// key. A `message` that isn't an object, or `content` that isn't a string,
/// is a format error.
pub fn normalize_response(body: &Value) -> Result<ChatCompletionResponse, OllamaError> {
    let mut response = ChatCompletionResponse::default();
    let message = match body.get("message") {
        None => return Ok(response),
        Some(Value::Object(message)) => message,
        Some(other) => {
            return Err(OllamaError::Format(format!(
                "`message` is not an object: {other}"
            )));
        }
    };

    let content = match message.get("content") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(content)) => content.clone(),
        Some(other) => {
            return Err(OllamaError::Format(format!(
                "`message.content` is not a string: {other}"
            )));
        }
    };

    response.choices[0].message = ChoiceMessage {
        content,
        tool_calls: message.get("tool_calls").filter(|v| !v.is_null()).cloned(),
    };
    Ok(response)
}

/// Pull Ollama’s `error` field out of a failed response, falling back to the
/// raw body when it isn’t JSON or has no such field.
pub fn error_detail(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).ok();
    match parsed.as_ref().and_then(|v| v.get("error")) {
        Some(Value::String(detail)) => detail.clone(),
        Some(other) => other.to_string(),
        None => body.to_owned(),
    }
}
