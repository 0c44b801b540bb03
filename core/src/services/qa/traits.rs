//! Traits for completion provider and profile source integration

use async_trait::async_trait;

use crate::errors::ProviderError;

use super::types::{CompletionRequest, CompletionResponse};

/// Trait for chat completion providers
#[async_trait]
pub trait CompletionProviderTrait: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, ProviderError>;
}

/// Trait for the profile document source
#[async_trait]
pub trait ProfileSourceTrait: Send + Sync {
    /// Load the profile text, `Ok(None)` when the document does not exist
    async fn load_profile(&self) -> Result<Option<String>, String>;

    /// Name of the document, used in error messages
    fn source_name(&self) -> String;
}
