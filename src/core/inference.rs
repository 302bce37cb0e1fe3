//! Chat-completion client.
//!
//! [`InferenceClient`] is the seam between a chat session and the hosted
//! model. [`GroqClient`] implements it against any OpenAI-compatible
//! `/chat/completions` endpoint with a fixed sampling configuration.
//! Failures are returned as [`InferenceError`]; turning them into
//! displayable text is the caller's job.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{ChatMessage, ChatRequest, ChatResponse};
use crate::utils::url::construct_api_url;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 1.0;
pub const MAX_TOKENS: u32 = 1024;

#[derive(Debug)]
pub enum InferenceError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    Transport(String),
    /// The provider answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body could not be understood.
    Malformed(String),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferenceError::Transport(msg) => write!(f, "request failed: {msg}"),
            InferenceError::Api { status, message } => {
                write!(f, "API request failed with status {status}: {message}")
            }
            InferenceError::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for InferenceError {}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            InferenceError::Malformed(err.to_string())
        } else {
            InferenceError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Sends `messages` to `model_id` and returns the top completion's text.
    async fn complete(
        &self,
        model_id: &str,
        messages: Vec<ChatMessage>,
        credential: &str,
    ) -> Result<String, InferenceError>;
}

pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
}

impl GroqClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InferenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| InferenceError::Transport(err.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InferenceClient for GroqClient {
    async fn complete(
        &self,
        model_id: &str,
        messages: Vec<ChatMessage>,
        credential: &str,
    ) -> Result<String, InferenceError> {
        let request = ChatRequest {
            model: model_id.to_string(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
            stop: None,
        };

        let url = construct_api_url(&self.base_url, "chat/completions");
        debug!(
            model = model_id,
            messages = request.messages.len(),
            url = %url,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {credential}"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        if !status.is_success() {
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message: summarize_api_error(&body),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|err| InferenceError::Malformed(err.to_string()))?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::Malformed("response contained no choices".to_string()))?;
        debug!(
            finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
            "Completion finished"
        );
        choice.message.content.ok_or_else(|| {
            InferenceError::Malformed("first choice has no message content".to_string())
        })
    }
}

/// Pull a one-line message out of a provider error body, falling back to
/// the trimmed raw text.
fn summarize_api_error(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "<empty body>".to_string();
    }

    let summary = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(|v| v.as_str())
                .or_else(|| value.get("error").and_then(|v| v.as_str()))
                .or_else(|| value.get("message").and_then(|v| v.as_str()))
                .map(str::to_owned)
        });

    match summary {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => trimmed.to_string(),
    }
}
