//! Domain entities representing core business objects.

pub mod otp_entry;


// Re-export commonly used types
pub use otp_entry::{OtpEntry, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
