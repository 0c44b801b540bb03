//! Configuration management for infrastructure services
//!
//! Handles:
//! - Mail provider selection and credentials
//! - Completion provider selection and credentials
//! - Profile document location
//!
//! Secrets are optional here; a provider without its key reports a
//! configuration error when it is first used rather than at startup.

use pa_shared::config::{env_opt, env_or};
use serde::{Deserialize, Serialize};

/// Default Resend API base URL
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

/// Default sender address for OTP emails
pub const DEFAULT_FROM_EMAIL: &str = "Portfolio Assistant <onboarding@resend.dev>";

/// Default Groq OpenAI-compatible API base URL
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

/// Default profile document path
pub const DEFAULT_PROFILE_PATH: &str = "information.txt";

/// Email service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Email service provider ("resend", "mock")
    pub provider: String,
    /// API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    pub api_url: String,
    /// Sender address
    pub from_email: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            provider: "resend".to_string(),
            api_key: None,
            api_url: DEFAULT_RESEND_API_URL.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            request_timeout_secs: 10,
        }
    }
}

impl MailerConfig {
    /// Load from `MAIL_PROVIDER`, `RESEND_API_KEY`, `RESEND_API_URL`,
    /// `OTP_FROM_EMAIL` and `MAIL_TIMEOUT_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_opt("MAIL_PROVIDER")
                .map(|p| p.to_lowercase())
                .unwrap_or(defaults.provider),
            api_key: env_opt("RESEND_API_KEY"),
            api_url: env_opt("RESEND_API_URL").unwrap_or(defaults.api_url),
            from_email: env_opt("OTP_FROM_EMAIL").unwrap_or(defaults.from_email),
            request_timeout_secs: env_or("MAIL_TIMEOUT_SECONDS", defaults.request_timeout_secs),
        }
    }
}

/// Completion service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Completion provider ("groq", "mock")
    pub provider: String,
    /// API key
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API base URL
    pub api_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            api_key: None,
            api_url: DEFAULT_GROQ_API_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl CompletionConfig {
    /// Load from `COMPLETION_PROVIDER`, `GROQ_API_KEY`, `GROQ_API_URL` and
    /// `COMPLETION_TIMEOUT_SECONDS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_opt("COMPLETION_PROVIDER")
                .map(|p| p.to_lowercase())
                .unwrap_or(defaults.provider),
            api_key: env_opt("GROQ_API_KEY"),
            api_url: env_opt("GROQ_API_URL").unwrap_or(defaults.api_url),
            request_timeout_secs: env_or(
                "COMPLETION_TIMEOUT_SECONDS",
                defaults.request_timeout_secs,
            ),
        }
    }
}

/// Profile document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Path to the profile text file
    pub path: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PROFILE_PATH.to_string(),
        }
    }
}

impl ProfileConfig {
    /// Load from `PROFILE_PATH`
    pub fn from_env() -> Self {
        Self {
            path: env_opt("PROFILE_PATH").unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mailer = MailerConfig::default();
        assert_eq!(mailer.provider, "resend");
        assert!(mailer.api_key.is_none());
        assert_eq!(mailer.api_url, "https://api.resend.com");

        let completion = CompletionConfig::default();
        assert_eq!(completion.provider, "groq");
        assert_eq!(completion.api_url, "https://api.groq.com/openai/v1");

        assert_eq!(ProfileConfig::default().path, "information.txt");
    }

    #[test]
    fn test_api_keys_are_not_serialized() {
        let config = MailerConfig {
            api_key: Some("re_secret".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("re_secret"));
    }
}
