//! LLM Module
//!
//! Chat completion providers used to answer profile questions: a Groq
//! client speaking the OpenAI-compatible chat API, a mock for development,
//! and an adapter to the core `CompletionProviderTrait`.

pub mod completion_adapter;
pub mod completion_service;
pub mod groq;
pub mod mock_completion;

// Re-export commonly used types
pub use completion_adapter::CompletionProviderAdapter;
pub use completion_service::CompletionService;
pub use groq::{GroqCompletionService, GroqConfig};
pub use mock_completion::MockCompletionService;

use crate::config::CompletionConfig;
use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create a completion service based on configuration
///
/// Unknown providers fall back to the mock implementation with a warning.
pub fn create_completion_service(
    config: &CompletionConfig,
) -> Result<Box<dyn CompletionService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => Ok(Box::new(MockCompletionService::new())),
        "groq" => {
            let groq_config = GroqConfig::from(config);
            if groq_config.api_key.is_none() {
                tracing::warn!("GROQ_API_KEY is not set; /ask will fail until it is configured");
            }
            Ok(Box::new(GroqCompletionService::new(groq_config)?))
        }
        other => {
            tracing::warn!(
                "Unknown completion provider '{}', using mock implementation",
                other
            );
            Ok(Box::new(MockCompletionService::new()))
        }
    }
}
