//! Client for the external chat-completion endpoint.
//!
//! [`ChatBackend`] is the seam between the routing layer and the network:
//! the TUI and the `say` command use [`OpenAiClient`], tests substitute a
//! recording backend.

use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{ChatMessage, ChatRequest, ChatResponse};
use crate::utils::auth::add_auth_headers;
use crate::utils::url::construct_api_url;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    /// The endpoint answered with a non-success status.
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    /// The response body was not a chat completion.
    Decode(serde_json::Error),
    /// The completion carried no choices or no message content.
    EmptyResponse,
    /// No key was available to authenticate the request.
    MissingApiKey,
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Transport(err) => write!(f, "request failed: {err}"),
            ChatError::Api { status, body } => match summarize_error_body(body) {
                Some(summary) => write!(f, "{status}: {summary}"),
                None => write!(f, "{status}"),
            },
            ChatError::Decode(err) => write!(f, "unexpected response from API: {err}"),
            ChatError::EmptyResponse => f.write_str("the API returned no message content"),
            ChatError::MissingApiKey => f.write_str("no API key is configured"),
        }
    }
}

impl Error for ChatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChatError::Transport(err) => Some(err),
            ChatError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Transport(err)
    }
}

fn extract_error_summary(value: &serde_json::Value) -> Option<String> {
    value
        .pointer("/error/message")
        .and_then(|v| v.as_str())
        .or_else(|| value.get("error").and_then(|v| v.as_str()))
        .or_else(|| value.get("message").and_then(|v| v.as_str()))
        .map(str::to_owned)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One-line description of an error body: the JSON error message when the
/// body carries one, otherwise the collapsed raw text.
pub fn summarize_error_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let summary = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|json| extract_error_summary(&json))
        .unwrap_or_else(|| trimmed.to_string());

    let collapsed = collapse_whitespace(&summary);
    (!collapsed.is_empty()).then_some(collapsed)
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatError>;
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatError> {
        let CompletionRequest {
            model,
            temperature,
            messages,
        } = request;

        let body = ChatRequest {
            model,
            messages,
            temperature,
            stream: false,
        };

        let chat_url = construct_api_url(&self.base_url, "chat/completions");
        let http_request = self
            .client
            .post(&chat_url)
            .header("Content-Type", "application/json");
        let http_request = add_auth_headers(http_request, &self.api_key);

        let response = http_request.json(&body).send().await?;
        let status = response.status();
        debug!(url = %chat_url, status = %status, "Chat completion response received");

        let text = response.text().await?;
        if !status.is_success() {
            return Err(ChatError::Api { status, body: text });
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(ChatError::Decode)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ChatError::EmptyResponse)
    }
}
