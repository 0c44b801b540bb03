//! Configuration for the OTP service

use chrono::Duration;
use pa_shared::config::{env_opt, env_or};

use crate::domain::entities::otp_entry::DEFAULT_EXPIRATION_MINUTES;

/// Upper bound for the validity window (24 hours)
pub const MAX_EXPIRATION_MINUTES: i64 = 24 * 60;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes a code stays valid
    pub code_expiration_minutes: i64,
    /// Failed attempts after which a code is discarded; `None` allows
    /// unlimited retries until expiry
    pub max_attempts: Option<u32>,
    /// Seconds between background expiry sweeps; `0` disables the sweeper
    pub sweep_interval_seconds: u64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: None,
            sweep_interval_seconds: 0,
        }
    }
}

impl OtpServiceConfig {
    /// Load from `OTP_EXPIRY_MINUTES`, `OTP_MAX_ATTEMPTS`, `OTP_SWEEP_INTERVAL_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let requested = env_or("OTP_EXPIRY_MINUTES", defaults.code_expiration_minutes);
        let code_expiration_minutes = requested.clamp(1, MAX_EXPIRATION_MINUTES);
        if code_expiration_minutes != requested {
            tracing::warn!(
                requested = requested,
                applied = code_expiration_minutes,
                "OTP_EXPIRY_MINUTES out of range, clamped"
            );
        }

        Self {
            code_expiration_minutes,
            max_attempts: env_opt("OTP_MAX_ATTEMPTS")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|max| *max > 0),
            sweep_interval_seconds: env_or(
                "OTP_SWEEP_INTERVAL_SECONDS",
                defaults.sweep_interval_seconds,
            ),
        }
    }

    /// The validity window as a duration, kept within `1..=MAX_EXPIRATION_MINUTES`
    pub fn validity(&self) -> Duration {
        Duration::minutes(self.code_expiration_minutes.clamp(1, MAX_EXPIRATION_MINUTES))
    }

    /// Whether a background sweeper should run
    pub fn sweeper_enabled(&self) -> bool {
        self.sweep_interval_seconds > 0
    }
}
