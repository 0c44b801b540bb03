//! Unit tests for the Groq completion service

use pa_core::services::qa::{build_messages, CompletionRequest, QaServiceConfig};
use reqwest::StatusCode;

use crate::llm::groq::{parse_completion_response, ChatCompletionBody};
use crate::llm::{CompletionService, GroqCompletionService, GroqConfig};
use crate::InfrastructureError;

fn request() -> CompletionRequest {
    let config = QaServiceConfig::default();
    CompletionRequest {
        model: config.model,
        messages: build_messages("Rust engineer.", "What do you do?"),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        top_p: config.top_p,
    }
}

fn config(api_key: Option<&str>, api_url: &str) -> GroqConfig {
    GroqConfig {
        api_key: api_key.map(str::to_string),
        api_url: api_url.to_string(),
        request_timeout_secs: 2,
    }
}

#[test]
fn test_request_body_wire_format() {
    let request = request();
    let body = serde_json::to_value(ChatCompletionBody::from(&request)).unwrap();

    assert_eq!(body["model"], "llama-3.1-8b-instant");
    assert_eq!(body["max_tokens"], 512);
    assert_eq!(body["top_p"], 1.0);
    assert_eq!(body["stream"], false);
    assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(
        body["messages"][1]["content"],
        "Profile:\nRust engineer.\n\nQuestion: What do you do?"
    );
}

#[test]
fn test_parse_success() {
    let body = r#"{
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "  I build backends.  "}, "finish_reason": "stop"}
        ],
        "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
    }"#;

    let response = parse_completion_response(StatusCode::OK, body).unwrap();
    assert_eq!(response.first_content(), Some("I build backends."));
}

#[test]
fn test_parse_no_choices() {
    let result = parse_completion_response(StatusCode::OK, r#"{"choices": []}"#);
    assert!(matches!(result, Err(InfrastructureError::Completion(_))));
}

#[test]
fn test_parse_malformed_body() {
    let result = parse_completion_response(StatusCode::OK, "<html>gateway</html>");
    assert!(matches!(result, Err(InfrastructureError::Completion(_))));
}

#[test]
fn test_parse_error_body() {
    let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error","code":"invalid_api_key"}}"#;
    match parse_completion_response(StatusCode::UNAUTHORIZED, body) {
        Err(InfrastructureError::Completion(msg)) => assert_eq!(msg, "Invalid API Key"),
        other => panic!("Expected Completion error, got {:?}", other),
    }
}

#[test]
fn test_parse_error_without_body() {
    match parse_completion_response(StatusCode::TOO_MANY_REQUESTS, "") {
        Err(InfrastructureError::Completion(msg)) => assert!(msg.contains("429")),
        other => panic!("Expected Completion error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_api_key_is_config_error() {
    let service = GroqCompletionService::new(config(None, "https://api.groq.com/openai/v1")).unwrap();

    match service.complete(&request()).await {
        Err(InfrastructureError::Config(msg)) => assert_eq!(msg, "GROQ_API_KEY is not set"),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_provider_is_completion_error() {
    let service = GroqCompletionService::new(config(Some("gsk_test"), "http://127.0.0.1:9")).unwrap();

    let result = service.complete(&request()).await;
    assert!(matches!(result, Err(InfrastructureError::Completion(_))));
}
