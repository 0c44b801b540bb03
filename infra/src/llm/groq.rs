//! Groq Completion Service Implementation
//!
//! Calls Groq's OpenAI-compatible chat completions endpoint
//! (`POST {api_url}/chat/completions`, bearer authentication) once per
//! question, without streaming or retries.

use async_trait::async_trait;
use pa_core::services::qa::{ChatMessage, CompletionChoice, CompletionRequest, CompletionResponse};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::completion_service::CompletionService;
use crate::config::CompletionConfig;
use crate::InfrastructureError;

/// Groq service configuration
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key; requests fail with a configuration error when absent
    pub api_key: Option<String>,
    /// API base URL
    pub api_url: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl From<&CompletionConfig> for GroqConfig {
    fn from(config: &CompletionConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    top_p: f32,
    stream: bool,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionBody<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            top_p: request.top_p,
            stream: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Interpret a chat completions response
pub(crate) fn parse_completion_response(
    status: StatusCode,
    body: &str,
) -> Result<CompletionResponse, InfrastructureError> {
    if !status.is_success() {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| format!("completion provider returned status {}", status));
        return Err(InfrastructureError::Completion(detail));
    }

    let parsed: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        InfrastructureError::Completion(format!("Unexpected response from completion provider: {}", e))
    })?;

    if parsed.choices.is_empty() {
        return Err(InfrastructureError::Completion(
            "Completion response contained no choices".to_string(),
        ));
    }

    Ok(CompletionResponse {
        choices: parsed
            .choices
            .into_iter()
            .map(|choice| CompletionChoice {
                content: choice.message.and_then(|m| m.content),
            })
            .collect(),
    })
}

/// Groq chat completion service
pub struct GroqCompletionService {
    client: Client,
    config: GroqConfig,
}

impl GroqCompletionService {
    /// Create a new Groq completion service
    pub fn new(config: GroqConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("Groq completion service initialized with endpoint: {}", config.api_url);

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionService for GroqCompletionService {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, InfrastructureError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InfrastructureError::Config("GROQ_API_KEY is not set".to_string()))?;

        debug!(model = %request.model, "Sending chat completion request to Groq");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&ChatCompletionBody::from(request))
            .send()
            .await
            .map_err(|e| {
                error!("Completion request failed: {}", e);
                InfrastructureError::Completion(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await?;

        let parsed = parse_completion_response(status, &text).map_err(|e| {
            error!(
                target: "completion_service",
                provider = "groq",
                status = %status,
                error = %e,
                "Completion provider returned an error"
            );
            e
        })?;

        info!(
            target: "completion_service",
            provider = "groq",
            model = %request.model,
            "Completion received"
        );

        Ok(parsed)
    }

    fn provider_name(&self) -> &str {
        "Groq"
    }
}
