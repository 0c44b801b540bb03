//! Traits for mailer and OTP store integration

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::OtpEntry;
use crate::errors::ProviderError;

/// Trait for email delivery of passcodes
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send `code` to `email`, stating that it is valid for `expiry_minutes`.
    /// Returns the provider's message id.
    async fn send_otp_email(
        &self,
        email: &str,
        code: &str,
        expiry_minutes: i64,
    ) -> Result<String, ProviderError>;
}

/// Trait for the OTP entry store, keyed by normalized email
#[async_trait]
pub trait OtpStoreTrait: Send + Sync {
    /// Fetch the entry for an email
    async fn get(&self, email: &str) -> Result<Option<OtpEntry>, String>;
    /// Insert or overwrite the entry for `entry.email`
    async fn set(&self, entry: OtpEntry) -> Result<(), String>;
    /// Remove the entry for an email, returning whether one existed
    async fn delete(&self, email: &str) -> Result<bool, String>;
    /// Remove every entry older than `validity` at `now`, returning the count removed
    async fn sweep(&self, now: DateTime<Utc>, validity: Duration) -> Result<usize, String>;
    /// Number of entries currently held
    async fn len(&self) -> Result<usize, String>;
}
