#[cfg(test)]
use crate::auth::{ApiKey, KeySource};
#[cfg(test)]
use crate::core::app::{App, AppInitConfig};
#[cfg(test)]
use crate::core::chat_client::{ChatBackend, ChatError, CompletionRequest};
#[cfg(test)]
use crate::core::mode::AssistantMode;
#[cfg(test)]
use crate::core::session::{SessionSettings, AVAILABLE_MODELS};
#[cfg(test)]
use crate::ui::theme::Theme;
#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
pub fn test_init_config(mode: Option<AssistantMode>) -> AppInitConfig {
    AppInitConfig {
        settings: SessionSettings::new(mode, AVAILABLE_MODELS[0], 0.7),
        preselected_mode: None,
        models: AVAILABLE_MODELS.iter().map(|m| m.to_string()).collect(),
        api_key: Some(ApiKey {
            key: "test-key".to_string(),
            source: KeySource::Environment,
        }),
        base_url: "https://api.test.com/v1".to_string(),
        theme: Theme::dark_default(),
    }
}

/// An app on the selector screen with a key already resolved.
#[cfg(test)]
pub fn create_test_app() -> App {
    App::new(test_init_config(None))
}

/// An app already chatting in `mode`.
#[cfg(test)]
pub fn create_chat_app(mode: AssistantMode) -> App {
    App::new(test_init_config(Some(mode)))
}

/// A [`ChatBackend`] that records every request and answers from a script.
#[cfg(test)]
pub struct RecordingBackend {
    reply: Option<String>,
    calls: Mutex<Vec<CompletionRequest>>,
}

#[cfg(test)]
impl RecordingBackend {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with [`ChatError::EmptyResponse`].
    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[cfg(test)]
#[async_trait::async_trait]
impl ChatBackend for RecordingBackend {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ChatError> {
        self.calls.lock().expect("calls lock").push(request);
        self.reply.clone().ok_or(ChatError::EmptyResponse)
    }
}
