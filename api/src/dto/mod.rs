pub mod ask;
pub mod otp;

pub use ask::{AskRequest, AskResponse};
pub use otp::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
pub use pa_shared::errors::ErrorResponse;
