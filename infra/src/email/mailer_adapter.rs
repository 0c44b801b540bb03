//! Email Service Trait Adapter
//!
//! Implements the core `MailerTrait` for any boxed `EmailService`, so the
//! provider can be selected at runtime.

use async_trait::async_trait;
use pa_core::errors::ProviderError;
use pa_core::services::otp::MailerTrait;

use super::email_service::EmailService;

/// Adapter that implements the core `MailerTrait` for an email service
pub struct EmailMailerAdapter {
    inner: Box<dyn EmailService>,
}

impl EmailMailerAdapter {
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    /// Name of the wrapped provider
    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl MailerTrait for EmailMailerAdapter {
    async fn send_otp_email(
        &self,
        email: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, ProviderError> {
        self.inner
            .send_verification_code(email, code, expiry_minutes)
            .await
            .map_err(ProviderError::from)
    }
}
