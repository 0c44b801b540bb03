//! Mock Completion Service Implementation
//!
//! Answers without calling any API. Used for local development with
//! `COMPLETION_PROVIDER=mock`.

use async_trait::async_trait;
use pa_core::services::qa::{CompletionRequest, CompletionResponse};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use super::completion_service::CompletionService;
use crate::InfrastructureError;

const DEFAULT_ANSWER: &str = "This is a mock answer. Set COMPLETION_PROVIDER=groq to query the real model.";

/// Mock completion service returning a fixed answer
#[derive(Clone)]
pub struct MockCompletionService {
    answer: String,
    request_count: Arc<AtomicU64>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self::with_answer(DEFAULT_ANSWER)
    }

    /// Create a mock that always returns `answer`
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            request_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the total number of completions served
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Default for MockCompletionService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, InfrastructureError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "completion_service",
            provider = "mock",
            model = %request.model,
            messages = request.messages.len(),
            request = count,
            "Completion served (mock)"
        );

        Ok(CompletionResponse::single(self.answer.clone()))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
