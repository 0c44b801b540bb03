//! One-time passcode entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default validity window for a passcode (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// An outstanding passcode issued to an email address.
///
/// At most one entry exists per (normalized) email; issuing a new code for
/// the same address replaces the previous entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpEntry {
    /// Normalized (trimmed, lowercase) email address, the store key
    pub email: String,

    /// The 6-digit numeric code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,

    /// Failed verification attempts made against this code
    pub attempts: u32,
}

impl OtpEntry {
    /// Creates an entry for `email` holding `code`, issued at `issued_at`
    pub fn new(email: impl Into<String>, code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            issued_at,
            attempts: 0,
        }
    }

    /// Generates a uniformly distributed 6-digit code from the OS CSPRNG
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:0width$}", code, width = CODE_LENGTH)
    }

    /// Time elapsed since the code was issued
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Instant after which the code is no longer accepted
    pub fn expires_at(&self, validity: Duration) -> DateTime<Utc> {
        self.issued_at
            .checked_add_signed(validity)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether the entry's age exceeds the validity window
    pub fn is_expired(&self, now: DateTime<Utc>, validity: Duration) -> bool {
        self.age(now) > validity
    }

    /// Compares a submitted code (whitespace-trimmed) in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.trim().as_bytes())
    }

    /// Records a failed attempt and returns the new count
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.attempts = self.attempts.saturating_add(1);
        self.attempts
    }
}
