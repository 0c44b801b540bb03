//! Chat completion request and response types

use serde::{Deserialize, Serialize};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Non-streaming completion request handed to a provider
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
}

/// One candidate answer returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionChoice {
    /// Message content; providers may return none
    pub content: Option<String>,
}

/// Provider response, reduced to what the service reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    /// Response holding a single choice with the given text
    pub fn single(content: impl Into<String>) -> Self {
        Self {
            choices: vec![CompletionChoice {
                content: Some(content.into()),
            }],
        }
    }

    /// Trimmed text of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.content.as_deref())
            .map(str::trim)
    }
}
