//! Unit tests for the Q&A service

use std::sync::Arc;

use crate::errors::{DomainError, ProviderError};
use crate::services::qa::{
    ChatRole, CompletionChoice, CompletionResponse, QaService, QaServiceConfig, SYSTEM_PROMPT,
};

use super::mocks::{MockCompletionProvider, MockProfileSource};

const PROFILE: &str = "Jane Doe is a backend engineer.\nSkills: Rust, PostgreSQL, Kubernetes.";

fn build_service(
    provider: Arc<MockCompletionProvider>,
    profile: Arc<MockProfileSource>,
) -> QaService<MockCompletionProvider, MockProfileSource> {
    QaService::new(provider, profile, QaServiceConfig::default())
}

#[tokio::test]
async fn test_answer_returns_trimmed_text() {
    let provider = Arc::new(MockCompletionProvider::answering(
        "\n  Jane works with Rust, PostgreSQL and Kubernetes.  \n",
    ));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider.clone(), profile);

    let answer = service.answer("What are your skills?").await.unwrap();
    assert_eq!(answer, "Jane works with Rust, PostgreSQL and Kubernetes.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_answer_sends_expected_request() {
    let provider = Arc::new(MockCompletionProvider::answering("ok"));
    let profile = Arc::new(MockProfileSource::with_text(&format!("  {}\n\n", PROFILE)));
    let service = build_service(provider.clone(), profile);

    service.answer("  What are your skills?  ").await.unwrap();

    let request = provider.last_request().unwrap();
    assert_eq!(request.model, "llama-3.1-8b-instant");
    assert_eq!(request.temperature, 0.2);
    assert_eq!(request.max_tokens, 512);
    assert_eq!(request.top_p, 1.0);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, ChatRole::System);
    assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, ChatRole::User);
    assert_eq!(
        request.messages[1].content,
        format!("Profile:\n{}\n\nQuestion: What are your skills?", PROFILE)
    );
}

#[tokio::test]
async fn test_answer_empty_question() {
    let provider = Arc::new(MockCompletionProvider::answering("unused"));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider.clone(), profile);

    for question in ["", "   ", "\n\t"] {
        match service.answer(question).await.unwrap_err() {
            DomainError::InvalidInput { message } => assert_eq!(message, "Question is required"),
            other => panic!("Expected invalid input, got {:?}", other),
        }
    }
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_answer_missing_profile() {
    let provider = Arc::new(MockCompletionProvider::answering("unused"));
    let profile = Arc::new(MockProfileSource::missing());
    let service = build_service(provider.clone(), profile);

    match service.answer("What are your skills?").await.unwrap_err() {
        DomainError::ProfileUnavailable { message } => {
            assert_eq!(message, "information.txt not found")
        }
        other => panic!("Expected profile unavailable, got {:?}", other),
    }
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_answer_unreadable_profile() {
    let provider = Arc::new(MockCompletionProvider::answering("unused"));
    let profile = Arc::new(MockProfileSource::unreadable("permission denied"));
    let service = build_service(provider, profile);

    let err = service.answer("What are your skills?").await.unwrap_err();
    assert!(matches!(err, DomainError::ProfileUnavailable { .. }));
    assert!(!err.is_client_error());
}

#[tokio::test]
async fn test_answer_reloads_profile_each_call() {
    let provider = Arc::new(MockCompletionProvider::answering("ok"));
    let profile = Arc::new(MockProfileSource::with_text("First version."));
    let service = build_service(provider.clone(), profile.clone());

    service.answer("Who are you?").await.unwrap();
    assert!(provider.last_request().unwrap().messages[1]
        .content
        .contains("First version."));

    profile.set_text("Second version.");
    service.answer("Who are you?").await.unwrap();
    assert!(provider.last_request().unwrap().messages[1]
        .content
        .contains("Second version."));
}

#[tokio::test]
async fn test_answer_unconfigured_provider() {
    let provider = Arc::new(MockCompletionProvider::failing(ProviderError::NotConfigured(
        "GROQ_API_KEY is not set".to_string(),
    )));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider, profile);

    match service.answer("What are your skills?").await.unwrap_err() {
        DomainError::Configuration { message } => assert_eq!(message, "GROQ_API_KEY is not set"),
        other => panic!("Expected configuration error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_answer_provider_failure_is_upstream() {
    let provider = Arc::new(MockCompletionProvider::failing(ProviderError::Failed(
        "Rate limit reached".to_string(),
    )));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider.clone(), profile);

    let err = service.answer("What are your skills?").await.unwrap_err();
    match &err {
        DomainError::Upstream { message } => assert_eq!(message, "Rate limit reached"),
        other => panic!("Expected upstream error, got {:?}", other),
    }
    assert_eq!(err.user_message(), "Completion provider error: Rate limit reached");

    // Never retried
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_answer_empty_choices_is_upstream() {
    let provider = Arc::new(MockCompletionProvider::with_response(CompletionResponse {
        choices: vec![],
    }));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider, profile);

    let err = service.answer("What are your skills?").await.unwrap_err();
    assert!(matches!(err, DomainError::Upstream { .. }));
}

#[tokio::test]
async fn test_answer_null_content_is_upstream() {
    let provider = Arc::new(MockCompletionProvider::with_response(CompletionResponse {
        choices: vec![CompletionChoice { content: None }],
    }));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let service = build_service(provider, profile);

    let err = service.answer("What are your skills?").await.unwrap_err();
    assert!(matches!(err, DomainError::Upstream { .. }));
}

#[tokio::test]
async fn test_answer_uses_configured_model() {
    let provider = Arc::new(MockCompletionProvider::answering("ok"));
    let profile = Arc::new(MockProfileSource::with_text(PROFILE));
    let config = QaServiceConfig {
        model: "llama-3.3-70b-versatile".to_string(),
        ..Default::default()
    };
    let service = QaService::new(provider.clone(), profile, config);

    service.answer("Hi?").await.unwrap();
    assert_eq!(provider.last_request().unwrap().model, "llama-3.3-70b-versatile");
}
