//! Main OTP service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pa_shared::utils::email::{is_valid_email, mask_email, normalize_email};
use tokio::sync::Mutex;

use crate::domain::entities::OtpEntry;
use crate::errors::{DomainError, DomainResult, OtpError, ProviderError};

use super::clock::{Clock, SystemClock};
use super::config::OtpServiceConfig;
use super::traits::{MailerTrait, OtpStoreTrait};
use super::types::{SendCodeResult, VerifyCodeResult};

/// OTP service for issuing and verifying emailed passcodes
pub struct OtpService<M: MailerTrait, S: OtpStoreTrait> {
    /// Mailer for delivering codes
    mailer: Arc<M>,
    /// Store holding outstanding codes
    store: Arc<S>,
    /// Time source for issue and expiry decisions
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: OtpServiceConfig,
    /// Serializes store transitions so sweep/read/write sequences never interleave
    state_lock: Mutex<()>,
}

impl<M: MailerTrait, S: OtpStoreTrait> OtpService<M, S> {
    /// Create a new OTP service using the system clock
    pub fn new(mailer: Arc<M>, store: Arc<S>, config: OtpServiceConfig) -> Self {
        Self::with_clock(mailer, store, config, Arc::new(SystemClock))
    }

    /// Create a new OTP service with an explicit time source
    pub fn with_clock(
        mailer: Arc<M>,
        store: Arc<S>,
        config: OtpServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            mailer,
            store,
            clock,
            config,
            state_lock: Mutex::new(()),
        }
    }

    /// Service configuration
    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new code for an email address
    ///
    /// This method:
    /// 1. Normalizes and validates the email
    /// 2. Sweeps expired entries
    /// 3. Generates a new 6-digit code
    /// 4. Sends the code through the mailer
    /// 5. Stores the code, replacing any earlier one, only if delivery succeeded
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The normalized email and delivery details
    /// * `Err(DomainError)` - `InvalidInput`, `Configuration` or `DeliveryFailed`
    pub async fn request_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(DomainError::InvalidInput {
                message: "A valid email address is required".to_string(),
            });
        }

        {
            let _guard = self.state_lock.lock().await;
            self.sweep_locked(self.clock.now()).await?;
        }

        let code = OtpEntry::generate_code();

        // The mailer call stays outside the state lock so a slow provider
        // never holds up verifications.
        let message_id = self
            .mailer
            .send_otp_email(&email, &code, self.config.code_expiration_minutes)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&email),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver OTP email"
                );
                match e {
                    ProviderError::NotConfigured(message) => DomainError::Configuration { message },
                    ProviderError::Failed(message) => DomainError::DeliveryFailed { message },
                }
            })?;

        let _guard = self.state_lock.lock().await;
        let entry = OtpEntry::new(email.clone(), code, self.clock.now());
        let expires_at = entry.expires_at(self.config.validity());
        self.store.set(entry).await.map_err(Self::store_error)?;

        tracing::info!(
            email = %mask_email(&email),
            message_id = %message_id,
            event = "otp_issued",
            "Issued new OTP"
        );

        Ok(SendCodeResult {
            email,
            message_id,
            expires_at,
        })
    }

    /// Verify a submitted code for an email address
    ///
    /// This method:
    /// 1. Normalizes the email
    /// 2. Sweeps expired entries
    /// 3. Rejects a missing entry (`NotFound`) or an expired one (`Expired`)
    /// 4. Compares the trimmed code in constant time; a mismatch keeps the
    ///    entry for retries (`Mismatch`) unless the attempt limit is reached
    /// 5. Deletes the entry on success so the code cannot be reused
    pub async fn verify_code(&self, email: &str, submitted: &str) -> DomainResult<VerifyCodeResult> {
        let email = normalize_email(email);
        let _guard = self.state_lock.lock().await;
        let now = self.clock.now();

        // Read before sweeping so a lazily expired code reports `Expired`
        // rather than `NotFound`.
        let entry = self.store.get(&email).await.map_err(Self::store_error)?;
        self.sweep_locked(now).await?;

        let mut entry = match entry {
            Some(entry) => entry,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "otp_not_found",
                    "No outstanding OTP for email"
                );
                return Err(OtpError::NotFound.into());
            }
        };

        if entry.is_expired(now, self.config.validity()) {
            self.store.delete(&email).await.map_err(Self::store_error)?;
            tracing::warn!(
                email = %mask_email(&email),
                event = "otp_expired",
                "OTP verification attempted after expiry"
            );
            return Err(OtpError::Expired.into());
        }

        if !entry.matches(submitted) {
            let attempts = entry.record_failed_attempt();

            if let Some(max_attempts) = self.config.max_attempts {
                if attempts >= max_attempts {
                    self.store.delete(&email).await.map_err(Self::store_error)?;
                    tracing::warn!(
                        email = %mask_email(&email),
                        attempts = attempts,
                        event = "otp_attempts_exceeded",
                        "OTP discarded after too many failed attempts"
                    );
                    return Err(OtpError::AttemptsExceeded.into());
                }
            }

            self.store.set(entry).await.map_err(Self::store_error)?;
            tracing::warn!(
                email = %mask_email(&email),
                attempts = attempts,
                event = "otp_mismatch",
                "OTP verification failed"
            );
            return Err(OtpError::Mismatch.into());
        }

        self.store.delete(&email).await.map_err(Self::store_error)?;
        tracing::info!(
            email = %mask_email(&email),
            event = "otp_verified",
            "OTP verified successfully"
        );

        Ok(VerifyCodeResult {
            email,
            verified_at: now,
        })
    }

    /// Remove every expired entry, returning the number removed
    pub async fn sweep_expired(&self) -> DomainResult<usize> {
        let _guard = self.state_lock.lock().await;
        self.sweep_locked(self.clock.now()).await
    }

    /// Number of outstanding codes
    pub async fn active_count(&self) -> DomainResult<usize> {
        self.store.len().await.map_err(Self::store_error)
    }

    async fn sweep_locked(&self, now: DateTime<Utc>) -> DomainResult<usize> {
        let removed = self
            .store
            .sweep(now, self.config.validity())
            .await
            .map_err(Self::store_error)?;

        if removed > 0 {
            tracing::debug!(removed = removed, event = "otp_swept", "Swept expired OTP entries");
        }

        Ok(removed)
    }

    fn store_error(message: String) -> DomainError {
        tracing::error!(error = %message, event = "otp_store_error", "OTP store operation failed");
        DomainError::Internal {
            message: format!("OTP store error: {}", message),
        }
    }
}
