//! # Portfolio Assistant Core
//!
//! Core business logic and domain layer for the Portfolio Assistant backend.
//! This crate contains the OTP entity, the OTP and Q&A services, the traits
//! their external collaborators implement, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
