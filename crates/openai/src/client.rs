//! HTTP client for biography generation.
//!
//! Wraps the hosted chat-completions endpoint using [`reqwest`]. One
//! request is made per author; there is no retry and no streaming. A
//! failed or unusable completion surfaces as a [`GenerationError`] the
//! caller is expected to treat as "no biography produced".

use std::time::Duration;

use async_trait::async_trait;

use biograph_core::prompt::biography_prompt;

use crate::messages::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Default endpoint base when `OPENAI_API_BASE` is not set.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Model used for all biography generation.
const BIOGRAPHY_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for all biography generation.
const SAMPLING_TEMPERATURE: f64 = 0.7;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from a single generation attempt.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request failed (network, DNS, TLS, timeout) or the
    /// response body could not be decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("completion API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered 2xx but the completion carried no usable text
    /// (no choices, or an empty/whitespace-only message).
    #[error("completion contained no usable text")]
    EmptyCompletion,
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Produces a biography for one author display name.
///
/// On success the returned text is guaranteed non-empty.
#[async_trait]
pub trait BiographyGenerator: Send + Sync {
    async fn generate(&self, display_name: &str) -> Result<String, GenerationError>;
}

// ---------------------------------------------------------------------------
// OpenAiClient
// ---------------------------------------------------------------------------

/// Client for the hosted chat-completions API.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// * `api_key`  - bearer credential for the API.
    /// * `api_base` - endpoint base, e.g. `https://api.openai.com/v1`.
    /// * `timeout`  - per-request timeout bounding one generation call.
    pub fn new(api_key: String, api_base: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            api_base,
            api_key,
        }
    }

    /// Request a biography for `display_name`.
    ///
    /// Sends a single user-role prompt with the fixed model and
    /// temperature, and returns the first choice's message content with
    /// surrounding whitespace trimmed.
    pub async fn generate_biography(&self, display_name: &str) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: BIOGRAPHY_MODEL.to_string(),
            messages: vec![ChatMessage::user(biography_prompt(display_name))],
            temperature: SAMPLING_TEMPERATURE,
        };

        let url = format!(
            "{}/chat/completions",
            self.api_base.trim_end_matches('/')
        );

        tracing::debug!(model = BIOGRAPHY_MODEL, %url, "Requesting completion");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyCompletion)?
            .message
            .content;

        let text = text.trim();
        if text.is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }
        Ok(text.to_string())
    }
}

#[async_trait]
impl BiographyGenerator for OpenAiClient {
    async fn generate(&self, display_name: &str) -> Result<String, GenerationError> {
        self.generate_biography(display_name).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _client = OpenAiClient::new(
            "sk-test".to_string(),
            DEFAULT_API_BASE.to_string(),
            Duration::from_secs(30),
        );
    }

    #[test]
    fn generation_error_display_api() {
        let err = GenerationError::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "completion API error (429): rate limited");
    }

    #[test]
    fn generation_error_display_empty_completion() {
        let err = GenerationError::EmptyCompletion;
        assert_eq!(err.to_string(), "completion contained no usable text");
    }
}
