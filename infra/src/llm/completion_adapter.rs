//! Completion Service Trait Adapter
//!
//! Implements the core `CompletionProviderTrait` for any boxed
//! `CompletionService`.

use async_trait::async_trait;
use pa_core::errors::ProviderError;
use pa_core::services::qa::{CompletionProviderTrait, CompletionRequest, CompletionResponse};

use super::completion_service::CompletionService;

/// Adapter that implements the core `CompletionProviderTrait`
pub struct CompletionProviderAdapter {
    inner: Box<dyn CompletionService>,
}

impl CompletionProviderAdapter {
    pub fn new(inner: Box<dyn CompletionService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl CompletionProviderTrait for CompletionProviderAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        self.inner.complete(request).await.map_err(ProviderError::from)
    }
}
