//! Shared utilities and common types for the Portfolio Assistant server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, HTTP server, CORS)
//! - Error response structures
//! - Utility functions (email normalization, validation, masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{CorsConfig, Environment, LoggingConfig, ServerConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse};
pub use utils::email;
