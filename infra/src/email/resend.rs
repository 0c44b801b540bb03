//! Resend Email Service Implementation
//!
//! Sends passcode emails through the Resend REST API
//! (`POST {api_url}/emails`, bearer authentication). Requests are made once;
//! failures are reported to the caller without retrying.

use async_trait::async_trait;
use pa_shared::utils::email::mask_email;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::email_service::EmailService;
use crate::config::MailerConfig;
use crate::InfrastructureError;

/// Resend service configuration
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key; requests fail with a configuration error when absent
    pub api_key: Option<String>,
    /// API base URL
    pub api_url: String,
    /// Sender address
    pub from_email: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl From<&MailerConfig> for ResendConfig {
    fn from(config: &MailerConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            from_email: config.from_email.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Interpret a Resend response, returning the message id on success
pub(crate) fn parse_send_response(status: StatusCode, body: &str) -> Result<String, InfrastructureError> {
    if status.is_success() {
        let parsed: SendEmailResponse = serde_json::from_str(body).map_err(|e| {
            InfrastructureError::Email(format!("Unexpected response from email provider: {}", e))
        })?;
        return Ok(parsed.id);
    }

    let detail = serde_json::from_str::<ResendErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("email provider returned status {}", status)
            } else {
                trimmed.to_string()
            }
        });

    Err(InfrastructureError::Email(detail))
}

/// Resend email service implementation
pub struct ResendEmailService {
    client: Client,
    config: ResendConfig,
}

impl ResendEmailService {
    /// Create a new Resend email service
    pub fn new(config: ResendConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Resend email service initialized with sender: {}", config.from_email);

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailService for ResendEmailService {
    async fn send_email(&self, to: &str, subject: &str, html: &str) -> Result<String, InfrastructureError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("RESEND_API_KEY is not set".to_string()))?;

        debug!("Sending email to {} via Resend", mask_email(to));

        let body = SendEmailBody {
            from: &self.config.from_email,
            to: [to],
            subject,
            html,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Email request to {} failed: {}", mask_email(to), e);
                InfrastructureError::Email(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await?;

        match parse_send_response(status, &text) {
            Ok(message_id) => {
                info!(
                    target: "email_service",
                    provider = "resend",
                    email = %mask_email(to),
                    message_id = %message_id,
                    "Email sent successfully"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    target: "email_service",
                    provider = "resend",
                    email = %mask_email(to),
                    status = %status,
                    error = %e,
                    "Email provider rejected the request"
                );
                Err(e)
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Resend"
    }

    async fn is_available(&self) -> bool {
        self.config.api_key.is_some()
    }
}
