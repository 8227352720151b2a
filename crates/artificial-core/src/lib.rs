//! Provider-agnostic building blocks of the **artificial** SDK.
//!
//! * [`provider::ChatCompletionProvider`] – the trait every backend implements.
//! * [`provider::ChatCompleteParameters`] – model, messages and generation knobs.
//! * [`generic::ChatCompletionResponse`] – the normalized reply.
//! * [`error::LlmError`] – the single error kind providers raise.
//! * [`ArtificialClient`] – a thin, cloneable wrapper around one backend.
pub mod client;
pub mod error;
pub mod generic;
pub mod provider;

pub use client::ArtificialClient;
