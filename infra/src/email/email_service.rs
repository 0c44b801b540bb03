//! Email Service Interface
//!
//! Defines the trait for email service implementations and the passcode
//! message template.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Rendered passcode email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmail {
    pub subject: String,
    pub html: String,
}

/// Render the passcode email stating the code and its validity window
pub fn render_otp_email(code: &str, expiry_minutes: i64) -> OtpEmail {
    let unit = if expiry_minutes == 1 { "minute" } else { "minutes" };
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 480px; margin: 0 auto;">
  <h2 style="color: #111827;">Your verification code</h2>
  <p>Use the code below to verify your email address:</p>
  <p style="font-size: 32px; font-weight: bold; letter-spacing: 8px; color: #111827;">{code}</p>
  <p>This code expires in {expiry_minutes} {unit}. If you did not request it, you can ignore this email.</p>
</div>"#,
        code = code,
        expiry_minutes = expiry_minutes,
        unit = unit,
    );

    OtpEmail {
        subject: format!("Your verification code: {}", code),
        html,
    }
}

/// Email service trait for sending messages
///
/// Implementations include:
/// - Resend HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an HTML email
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String, InfrastructureError>;

    /// Send a passcode using the standard template
    async fn send_verification_code(
        &self,
        to: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, InfrastructureError> {
        let email = render_otp_email(code, expiry_minutes);
        self.send_email(to, &email.subject, &email.html).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}
