//! Email Service Module
//!
//! Email delivery for one-time passcodes. Includes a Resend HTTP client,
//! a mock implementation for development, and an adapter to the core
//! `MailerTrait`.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all email providers
//! - **Mock Implementation**: Console output for development
//! - **Resend Support**: Production email via the Resend API
//! - **Security**: Email masking in logs

pub mod email_service;
pub mod mailer_adapter;
pub mod mock_email;
pub mod resend;

// Re-export commonly used types
pub use email_service::{render_otp_email, EmailService, OtpEmail};
pub use mailer_adapter::EmailMailerAdapter;
pub use mock_email::MockEmailService;
pub use resend::{ResendConfig, ResendEmailService};

use crate::config::MailerConfig;
use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Returns the implementation named by `config.provider`. Unknown providers
/// fall back to the mock implementation with a warning.
pub fn create_email_service(
    config: &MailerConfig,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => Ok(Box::new(MockEmailService::new())),
        "resend" => {
            let resend_config = ResendConfig::from(config);
            if resend_config.api_key.is_none() {
                tracing::warn!("RESEND_API_KEY is not set; /send-otp will fail until it is configured");
            }
            Ok(Box::new(ResendEmailService::new(resend_config)?))
        }
        other => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                other
            );
            Ok(Box::new(MockEmailService::new()))
        }
    }
}
