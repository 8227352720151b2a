use artificial::ollama::OllamaAdapterBuilder;
use artificial::{
    ArtificialClient,
    generic::{GenericMessage, GenericRole},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};

/// # Chat Completion – Ollama
///
/// Sends one non-streaming chat request to a local Ollama server and prints
/// the assistant’s answer (and any tool calls it asked for).
///
/// ```bash
/// ollama serve &                   # if it isn't running yet
/// export OLLAMA_API_URL=http://localhost:11434   # optional
/// cargo run -p artificial --example ollama_chat_complete
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OllamaAdapterBuilder::new_from_env().build()?;

    let client = ArtificialClient::new(backend);

    let messages = vec![
        GenericMessage::new(
            "You are a concise, witty assistant.".into(),
            GenericRole::System,
        ),
        GenericMessage::new(
            "Why is the Rust borrow checker important?".into(),
            GenericRole::User,
        ),
    ];

    let params = ChatCompleteParameters::new("llama3", messages)
        .with_temperature(0.2)
        .with_num_predict(256);

    let response = client.chat_completions_create(params).await?;

    let Some(message) = response.message() else {
        println!("Assistant returned no choices 🤖");
        return Ok(());
    };

    println!("Assistant: {}", message.content);

    if let Some(tool_calls) = &message.tool_calls {
        println!("Tool calls: {}", serde_json::to_string_pretty(tool_calls)?);
    }

    Ok(())
}
