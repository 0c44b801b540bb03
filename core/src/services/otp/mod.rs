//! OTP service module for email-based verification
//!
//! This module provides the passcode workflow:
//! - Code generation and delivery through a mailer
//! - Code verification with lazy expiry and single use
//! - Optional attempt limit and background expiry sweeping

mod clock;
mod config;
mod service;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use sweeper::OtpSweeper;
pub use traits::{MailerTrait, OtpStoreTrait};
pub use types::{SendCodeResult, VerifyCodeResult};
