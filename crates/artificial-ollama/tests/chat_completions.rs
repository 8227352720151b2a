//! End-to-end tests for the Ollama adapter against a mock `/api/chat`.

use std::time::Duration;

use artificial_core::{
    ArtificialClient,
    error::LlmErrorKind,
    generic::{GenericMessage, GenericRole},
    provider::{ChatCompleteParameters, ChatCompletionProvider as _},
};
use artificial_ollama::{OllamaAdapter, OllamaAdapterBuilder};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> OllamaAdapter {
    // trailing slash must not produce `//api/chat`
    OllamaAdapterBuilder::new()
        .with_api_url(format!("{}/", server.uri()))
        .with_timeout(Duration::from_secs(5))
        .build()
        .expect("adapter")
}

fn user_hi() -> Vec<Value> {
    vec![json!({"role": "user", "content": "hi"})]
}

#[tokio::test]
async fn sends_expected_payload_and_normalizes_reply() {
    let server = MockServer::start().await;
    let tools = vec![json!({"type": "function", "function": {"name": "f"}})];

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "model": "llama3",
            "messages": user_hi(),
            "stream": false,
            "tools": tools,
            "options": {"temperature": 0.2},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama3",
            "message": {
                "role": "assistant",
                "content": "hi",
                "tool_calls": [{"id": 1}],
            },
            "done": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ChatCompleteParameters::new("llama3", user_hi())
        .with_temperature(0.2)
        .with_tools(tools.clone());
    let response = adapter_for(&server)
        .chat_completions_create(params)
        .await
        .expect("chat succeeds");

    assert_eq!(response.choices.len(), 1);
    assert_eq!(response.choices[0].message.content, "hi");
    assert_eq!(response.choices[0].message.tool_calls, Some(json!([{"id": 1}])));
}

#[tokio::test]
async fn empty_message_yields_empty_content_and_no_tool_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": {}})))
        .mount(&server)
        .await;

    let response = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect("chat succeeds");

    let message = response.message().expect("one choice");
    assert_eq!(message.content, "");
    assert!(message.tool_calls.is_none());
}

#[tokio::test]
async fn generic_messages_are_accepted_through_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "model": "llama3",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hi"},
            ],
            "stream": false,
            "keep_alive": "5m",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": {"content": "hey"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ArtificialClient::new(adapter_for(&server));
    let messages = vec![
        GenericMessage::new("be brief".into(), GenericRole::System),
        GenericMessage::new("hi".into(), GenericRole::User),
    ];
    let params = ChatCompleteParameters::new("llama3", messages).with_extra("keep_alive", "5m");

    let response = client.chat_completions_create(params).await.expect("chat succeeds");
    assert_eq!(response.choices[0].message.content, "hey");
}

#[tokio::test]
async fn non_200_uses_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("500 must fail");

    assert_eq!(err.to_string(), "Ollama request failed with status 500: boom");
    assert_eq!(err.kind(), LlmErrorKind::Status(500));
}

#[tokio::test]
async fn non_200_without_json_falls_back_to_body_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model \"nope\" not found"))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("nope", user_hi()))
        .await
        .expect_err("404 must fail");

    assert_eq!(
        err.to_string(),
        "Ollama request failed with status 404: model \"nope\" not found"
    );
}

#[tokio::test]
async fn non_200_other_success_codes_are_failures_too() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": {}})))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("only 200 counts as success");

    assert!(err.to_string().contains("status 201"));
}

#[tokio::test]
async fn connection_refused_reports_ollama_not_running() {
    // grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };

    let adapter = OllamaAdapterBuilder::new()
        .with_api_url(format!("http://127.0.0.1:{port}"))
        .build()
        .expect("adapter");

    let err = adapter
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("nothing is listening");

    assert_eq!(
        err.to_string(),
        "Connection failed: Ollama is likely not running. Start Ollama by running `ollama serve` on your host."
    );
    assert_eq!(err.kind(), LlmErrorKind::Connect);
}

#[tokio::test]
async fn timeout_is_wrapped_as_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": {"content": "late"}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let adapter = OllamaAdapterBuilder::new()
        .with_api_url(server.uri())
        .with_timeout(Duration::from_millis(200))
        .build()
        .expect("adapter");

    let err = adapter
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("request must time out");

    assert!(err.to_string().starts_with("An error occurred: "));
    assert_eq!(err.kind(), LlmErrorKind::Other);
}

#[tokio::test]
async fn invalid_json_on_success_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("body is not JSON");

    assert!(err.to_string().starts_with("An error occurred: "));
}

#[tokio::test]
async fn non_object_message_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "x"})))
        .mount(&server)
        .await;

    let err = adapter_for(&server)
        .chat_completions_create(ChatCompleteParameters::new("llama3", user_hi()))
        .await
        .expect_err("message must be an object");

    assert!(err.to_string().starts_with("An error occurred: "));
    assert_eq!(err.kind(), LlmErrorKind::Other);
}
