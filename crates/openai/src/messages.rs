//! Wire types for the chat-completions endpoint.
//!
//! Only the fields this worker sends or reads are modelled; everything
//! else in the response body is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier, e.g. `gpt-3.5-turbo`.
    pub model: String,
    /// Conversation so far; this worker always sends a single user turn.
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature.
    pub temperature: f64,
}

/// One chat message, in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `user` on the way out, `assistant` on the way back.
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Response body for `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice; the first is the one this worker uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
