//! Generic, lightweight client that executes chat requests against a single
//! concrete provider.
//!
//! The client is **generic over the backend type `B`**, so the compiler
//! guarantees that the messages you pass convert into what the backend
//! expects, with no dynamic dispatch in user code.
//!
//! Any backend crate (e.g. `artificial-ollama`) just implements
//! [`ChatCompletionProvider`] and the same client works out of the box.
use std::{future::Future, pin::Pin, sync::Arc};

use crate::{
    error::Result,
    generic::ChatCompletionResponse,
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

/// A client bound to a single provider.
///
/// Cloning is cheap: the backend sits behind an `Arc`.
#[derive(Debug)]
pub struct ArtificialClient<B> {
    backend: Arc<B>,
}

impl<B> Clone for ArtificialClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B> ArtificialClient<B>
where
    B: ChatCompletionProvider,
{
    /// Create a new client that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Access the underlying backend (e.g. to inspect provider-specific settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B> ChatCompletionProvider for ArtificialClient<B>
where
    B: ChatCompletionProvider + 'static,
{
    type Message = B::Message;

    fn chat_completions_create<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<ChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let backend = Arc::clone(&self.backend);
        Box::pin(async move { backend.chat_completions_create(params).await })
    }
}
