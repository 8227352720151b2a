use std::{future::Future, pin::Pin, sync::Arc};

use artificial_core::{
    error::{LlmError, Result},
    generic::ChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};
use serde_json::Value;

use crate::{
    OllamaAdapter,
    api::{ChatRequest, normalize_response},
};

impl ChatCompletionProvider for OllamaAdapter {
    /// Messages are forwarded to Ollama untouched.
    type Message = Value;

    fn chat_completions_create<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<ChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = ChatRequest::from(params);

            let response = client
                .chat(&request)
                .await
                .and_then(|body| normalize_response(&body))
                .map_err(|err| {
                    let err = LlmError::from(err);
                    #[cfg(feature = "tracing")]
                    tracing::warn!(model = %request.model, error = %err, "Ollama chat request failed");
                    err
                })?;

            Ok(response)
        })
    }
}
