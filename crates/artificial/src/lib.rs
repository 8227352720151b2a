//! # `artificial` – The umbrella crate
//!
//! This crate is a *one-stop import* for the workspace
//!
//! | Crate                    | What it provides                                                                      |
//! |--------------------------|---------------------------------------------------------------------------------------|
//! | **`artificial-core`**    | Provider-agnostic trait (`ChatCompletionProvider`), parameters, response, `LlmError`  |
//! | **`artificial-ollama`**  | Thin HTTP client that implements the provider trait for Ollama’s `/api/chat` *(optional)* |
//!
//! The `ollama` Cargo feature (on by default) re-exports the adapter crate so
//! a single dependency line is enough to access the whole stack:
//!
//! ```toml
//! [dependencies]
//! artificial = { version = "0.7", features = ["ollama"] }
//! ```
//!
//! Enable the `tracing` feature to get request/failure events from the
//! adapter through the [`tracing`](https://docs.rs/tracing) facade.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use artificial::{
//!     ArtificialClient,
//!     generic::{GenericMessage, GenericRole},
//!     provider::{ChatCompleteParameters, ChatCompletionProvider as _},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = artificial::ollama::OllamaAdapterBuilder::new_from_env().build()?;
//!     let client  = ArtificialClient::new(backend);
//!     let params  = ChatCompleteParameters::new(
//!         "llama3",
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)],
//!     );
//!     let answer  = client.chat_completions_create(params).await?;
//!     println!("{}", answer.choices[0].message.content);
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/artificial/latest")]

pub use artificial_core::*;

#[cfg(feature = "ollama")]
pub use artificial_ollama as ollama;
