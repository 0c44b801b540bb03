//! Q&A service implementation

use std::sync::Arc;

use crate::errors::{DomainError, DomainResult, ProviderError};

use super::config::QaServiceConfig;
use super::prompt::build_messages;
use super::traits::{CompletionProviderTrait, ProfileSourceTrait};
use super::types::CompletionRequest;

/// Answers visitor questions from the profile document
pub struct QaService<P: CompletionProviderTrait, R: ProfileSourceTrait> {
    provider: Arc<P>,
    profile: Arc<R>,
    config: QaServiceConfig,
}

impl<P: CompletionProviderTrait, R: ProfileSourceTrait> QaService<P, R> {
    pub fn new(provider: Arc<P>, profile: Arc<R>, config: QaServiceConfig) -> Self {
        Self {
            provider,
            profile,
            config,
        }
    }

    /// Answer a question using only the profile text
    ///
    /// The profile is reloaded on every call so edits take effect without a
    /// restart. Provider failures are reported once and never retried.
    pub async fn answer(&self, question: &str) -> DomainResult<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::InvalidInput {
                message: "Question is required".to_string(),
            });
        }

        let profile = self
            .profile
            .load_profile()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, event = "profile_read_failed", "Failed to read profile");
                DomainError::ProfileUnavailable { message: e }
            })?
            .ok_or_else(|| {
                let message = format!("{} not found", self.profile.source_name());
                tracing::error!(event = "profile_missing", "{}", message);
                DomainError::ProfileUnavailable { message }
            })?;

        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages: build_messages(profile.trim(), question),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
        };

        let response = self.provider.complete(&request).await.map_err(|e| {
            tracing::error!(error = %e, event = "completion_failed", "Completion request failed");
            match e {
                ProviderError::NotConfigured(message) => DomainError::Configuration { message },
                ProviderError::Failed(message) => DomainError::Upstream { message },
            }
        })?;

        let answer = response
            .first_content()
            .ok_or_else(|| DomainError::Upstream {
                message: "Completion response contained no answer".to_string(),
            })?
            .to_string();

        tracing::info!(
            question_chars = question.chars().count(),
            answer_chars = answer.chars().count(),
            event = "question_answered",
            "Answered profile question"
        );

        Ok(answer)
    }
}
