//! Ollama backend for the **artificial** SDK.
//!
//! Talks to a local (or remote) Ollama server through its non-streaming
//! `/api/chat` endpoint and hands back the shared
//! [`artificial_core::generic::ChatCompletionResponse`].
//!
//! ```rust,no_run
//! use artificial_core::provider::{ChatCompleteParameters, ChatCompletionProvider as _};
//! use artificial_ollama::OllamaAdapterBuilder;
//! use serde_json::json;
//!
//! # async fn run() -> artificial_core::error::Result<()> {
//! let backend = OllamaAdapterBuilder::new().build()?;
//! let params = ChatCompleteParameters::new("llama3", vec![json!({"role": "user", "content": "hi"})])
//!     .with_temperature(0.2);
//! let response = backend.chat_completions_create(params).await?;
//! println!("{}", response.choices[0].message.content);
//! # Ok(())
//! # }
//! ```
mod adapter;
mod provider_impl_chat;

pub use adapter::{
    API_URL_ENV, DEFAULT_API_URL, DEFAULT_TIMEOUT, OllamaAdapter, OllamaAdapterBuilder,
    OllamaConfig,
};
pub mod api;
mod client;
pub mod error;

pub use client::OllamaClient;
