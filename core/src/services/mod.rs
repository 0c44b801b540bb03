//! Business services containing domain logic and use cases.

pub mod otp;
pub mod qa;

// Re-export commonly used types
pub use otp::{
    Clock, MailerTrait, OtpService, OtpServiceConfig, OtpStoreTrait, OtpSweeper, SendCodeResult,
    SystemClock, VerifyCodeResult,
};
pub use qa::{
    ChatMessage, ChatRole, CompletionChoice, CompletionProviderTrait, CompletionRequest,
    CompletionResponse, ProfileSourceTrait, QaService, QaServiceConfig,
};
