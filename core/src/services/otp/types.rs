//! Types for OTP service results

use chrono::{DateTime, Utc};

/// Result of issuing a code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// Normalized email the code was sent to
    pub email: String,
    /// Message id reported by the mail provider
    pub message_id: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    /// Normalized email that was verified
    pub email: String,
    /// When the code was accepted
    pub verified_at: DateTime<Utc>,
}
