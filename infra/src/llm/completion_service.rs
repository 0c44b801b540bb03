//! Completion Service Interface

use async_trait::async_trait;
use pa_core::services::qa::{CompletionRequest, CompletionResponse};

use crate::InfrastructureError;

/// Chat completion service trait
///
/// Implementations include:
/// - Groq (OpenAI-compatible chat completions)
/// - Mock implementation for development
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Run a single non-streaming chat completion
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;
}
