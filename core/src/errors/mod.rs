//! Domain-specific error types and error handling.

mod types;


pub use types::{OtpError, ProviderError};

use pa_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Profile unavailable: {message}")]
    ProfileUnavailable { message: String },

    #[error("Failed to send OTP email: {message}")]
    DeliveryFailed { message: String },

    #[error("Completion provider error: {message}")]
    Upstream { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable machine-readable code for API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::InvalidInput { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Otp(OtpError::NotFound) => error_codes::OTP_NOT_FOUND,
            DomainError::Otp(OtpError::Expired) => error_codes::OTP_EXPIRED,
            DomainError::Otp(OtpError::Mismatch) => error_codes::OTP_MISMATCH,
            DomainError::Otp(OtpError::AttemptsExceeded) => error_codes::OTP_ATTEMPTS_EXCEEDED,
            DomainError::Configuration { .. } => error_codes::CONFIGURATION_ERROR,
            DomainError::ProfileUnavailable { .. } => error_codes::PROFILE_UNAVAILABLE,
            DomainError::DeliveryFailed { .. } => error_codes::EMAIL_DELIVERY_FAILED,
            DomainError::Upstream { .. } => error_codes::UPSTREAM_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the caller caused the error (as opposed to the operator or a provider)
    pub fn is_client_error(&self) -> bool {
        matches!(self, DomainError::InvalidInput { .. } | DomainError::Otp(_))
    }

    /// Human-readable message safe to show to API clients
    pub fn user_message(&self) -> String {
        match self {
            DomainError::InvalidInput { message }
            | DomainError::Configuration { message }
            | DomainError::ProfileUnavailable { message } => message.clone(),
            DomainError::Otp(otp) => otp.to_string(),
            DomainError::DeliveryFailed { message } => {
                format!("Failed to send OTP email: {}", message)
            }
            DomainError::Upstream { message } => format!("Completion provider error: {}", message),
            DomainError::Internal { .. } => "An internal error occurred".to_string(),
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.user_message())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
