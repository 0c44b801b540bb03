//! Error types for the OTP workflow and external collaborators

use thiserror::Error;

/// OTP state violations, all caused by the caller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("No OTP found for this email. Please request a new code")]
    NotFound,

    #[error("OTP has expired. Please request a new code")]
    Expired,

    #[error("Invalid OTP")]
    Mismatch,

    #[error("Too many failed attempts. Please request a new code")]
    AttemptsExceeded,
}

/// Failure reported by an external provider (mailer, completion API)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider lacks a required credential or setting
    #[error("{0}")]
    NotConfigured(String),

    /// The provider call itself failed (network, auth, quota, bad response)
    #[error("{0}")]
    Failed(String),
}
