//! Routing table from assistant mode to system-prompt wrapper.

use tracing::debug;

use crate::api::ChatMessage;
use crate::core::chat_client::{ChatBackend, ChatError, CompletionRequest};
use crate::core::message::Message;
use crate::core::mode::AssistantMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub mode: AssistantMode,
    pub label: &'static str,
    pub system_prompt: Option<&'static str>,
}

const fn route(mode: AssistantMode) -> Route {
    Route {
        mode,
        label: mode.label(),
        system_prompt: mode.system_prompt(),
    }
}

/// One entry per mode, in selector order.
pub static ROUTES: [Route; 5] = [
    route(AssistantMode::WriteUp),
    route(AssistantMode::SelfAssessment),
    route(AssistantMode::Jigsaw),
    route(AssistantMode::FeedbackOnFeedback),
    route(AssistantMode::Clarification),
];

pub fn route_for(mode: AssistantMode) -> &'static Route {
    &ROUTES[mode.index()]
}

pub fn route_by_label(label: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.label == label)
}

/// The API message list for a turn: the route's system prompt (if any)
/// followed by every user/assistant turn in order.
pub fn build_api_messages<'a, I>(mode: AssistantMode, history: I) -> Vec<ChatMessage>
where
    I: IntoIterator<Item = &'a Message>,
{
    let route = route_for(mode);
    route
        .system_prompt
        .map(|prompt| ChatMessage::new("system", prompt))
        .into_iter()
        .chain(history.into_iter().filter_map(|message| {
            message
                .role
                .to_api_role()
                .map(|role| ChatMessage::new(role, message.content.clone()))
        }))
        .collect()
}

pub fn build_request<'a, I>(
    mode: AssistantMode,
    history: I,
    model: &str,
    temperature: f64,
) -> CompletionRequest
where
    I: IntoIterator<Item = &'a Message>,
{
    CompletionRequest {
        model: model.to_string(),
        temperature,
        messages: build_api_messages(mode, history),
    }
}

/// Send one turn through the backend. Exactly one call, no retries.
pub async fn dispatch(
    backend: &dyn ChatBackend,
    mode: AssistantMode,
    history: &[Message],
    model: &str,
    temperature: f64,
) -> Result<String, ChatError> {
    send(backend, mode, build_request(mode, history, model, temperature)).await
}

/// Forward an already-built request, logging the route it came from.
pub async fn send(
    backend: &dyn ChatBackend,
    mode: AssistantMode,
    request: CompletionRequest,
) -> Result<String, ChatError> {
    debug!(
        mode = mode.slug(),
        model = %request.model,
        temperature = request.temperature,
        messages = request.messages.len(),
        "Dispatching chat turn"
    );
    backend.complete(request).await
}
