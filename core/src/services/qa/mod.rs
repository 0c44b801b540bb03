//! Q&A service module for profile questions
//!
//! Builds a two-message prompt from a profile document and a visitor's
//! question and forwards it to a chat completion provider.

mod config;
mod prompt;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::QaServiceConfig;
pub use prompt::{build_messages, SYSTEM_PROMPT};
pub use service::QaService;
pub use traits::{CompletionProviderTrait, ProfileSourceTrait};
pub use types::{ChatMessage, ChatRole, CompletionChoice, CompletionRequest, CompletionResponse};
