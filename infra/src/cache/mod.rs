//! Cache module for OTP storage
//!
//! Outstanding codes live in process memory only; they are lost on restart
//! and are not shared between instances.

pub mod in_memory_otp_store;

#[cfg(test)]
mod tests;

pub use in_memory_otp_store::InMemoryOtpStore;
