//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator traits defined in `pa_core`:
//!
//! - **Cache**: in-process OTP store
//! - **Email**: email delivery providers (Resend HTTP API, mock)
//! - **LLM**: chat completion providers (Groq OpenAI-compatible API, mock)
//! - **Profile**: filesystem profile document source
//!
//! Provider clients expose their own infrastructure traits (`EmailService`,
//! `CompletionService`); adapters bridge them to the core traits so the
//! provider can be chosen at runtime from configuration.

use pa_core::errors::ProviderError;

/// Cache module - in-memory OTP storage
pub mod cache;

/// Configuration for infrastructure services
pub mod config;

/// Email service module - external email providers
pub mod email;

/// LLM module - external chat completion providers
pub mod llm;

/// Profile module - profile document sources
pub mod profile;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider rejected or failed the request
    #[error("Email service error: {0}")]
    Email(String),

    /// Completion provider rejected or failed the request
    #[error("Completion service error: {0}")]
    Completion(String),
}

impl From<InfrastructureError> for ProviderError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => ProviderError::NotConfigured(message),
            InfrastructureError::Email(message) | InfrastructureError::Completion(message) => {
                ProviderError::Failed(message)
            }
            InfrastructureError::Http(e) => ProviderError::Failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_maps_to_not_configured() {
        let err: ProviderError = InfrastructureError::Config("RESEND_API_KEY is not set".into()).into();
        assert_eq!(err, ProviderError::NotConfigured("RESEND_API_KEY is not set".into()));
    }

    #[test]
    fn test_provider_errors_keep_their_message() {
        let err: ProviderError = InfrastructureError::Email("domain not verified".into()).into();
        assert_eq!(err, ProviderError::Failed("domain not verified".into()));

        let err: ProviderError = InfrastructureError::Completion("Invalid API Key".into()).into();
        assert_eq!(err, ProviderError::Failed("Invalid API Key".into()));
    }
}
