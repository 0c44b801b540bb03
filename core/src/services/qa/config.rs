//! Configuration for the Q&A service

use pa_shared::config::{env_opt, env_or};

/// Default chat model
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone)]
pub struct QaServiceConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

impl Default for QaServiceConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 512,
            top_p: 1.0,
        }
    }
}

impl QaServiceConfig {
    /// Load from `GROQ_MODEL` and `COMPLETION_MAX_TOKENS`; sampling stays fixed
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model: env_opt("GROQ_MODEL").unwrap_or(defaults.model),
            max_tokens: env_or("COMPLETION_MAX_TOKENS", defaults.max_tokens),
            ..defaults
        }
    }
}
