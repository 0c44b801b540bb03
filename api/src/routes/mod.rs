//! Route handlers
//!
//! - `health` - liveness probe
//! - `ask` - profile question answering
//! - `otp` - email passcode issue and verification

pub mod ask;
pub mod health;
pub mod otp;

use std::sync::Arc;

use pa_core::services::otp::{MailerTrait, OtpService, OtpStoreTrait};
use pa_core::services::qa::{CompletionProviderTrait, ProfileSourceTrait, QaService};

/// Application state that holds shared services
pub struct AppState<M, S, P, R>
where
    M: MailerTrait,
    S: OtpStoreTrait,
    P: CompletionProviderTrait,
    R: ProfileSourceTrait,
{
    pub otp_service: Arc<OtpService<M, S>>,
    pub qa_service: Arc<QaService<P, R>>,
}
