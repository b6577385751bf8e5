use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::session::SessionContext;
use super::ui_state::UiState;
use crate::core::chat_client::{ChatError, CompletionRequest};
use crate::core::mode::AssistantMode;
use crate::core::router::build_request;

/// Everything the event loop needs to run one request off the UI thread.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    pub id: u64,
    pub mode: AssistantMode,
    pub request: CompletionRequest,
    pub cancel_token: CancellationToken,
}

/// Reply text recorded in place of a failed completion.
pub fn error_turn_text(err: &ChatError) -> String {
    format!("⚠️ Error querying OpenAI: {err}")
}

pub struct ConversationController<'a> {
    session: &'a mut SessionContext,
    ui: &'a mut UiState,
}

impl<'a> ConversationController<'a> {
    pub fn new(session: &'a mut SessionContext, ui: &'a mut UiState) -> Self {
        Self { session, ui }
    }

    /// Append the user's turn and build the request for it. Returns `None`
    /// for blank input, when no mode is active, or while another request
    /// is still in flight.
    pub fn begin_turn(&mut self, text: &str) -> Option<TurnRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let mode = self.session.mode()?;
        if self.session.is_waiting() {
            self.ui
                .set_status("Still waiting for the previous reply (Esc to go back)");
            return None;
        }

        self.session.conversation.push_user(text);
        let request = build_request(
            mode,
            self.session.conversation.api_turns(),
            &self.session.settings.model,
            self.session.settings.temperature,
        );
        let turn = self.session.open_turn();
        self.ui.clear_status();
        self.ui.scroll_to_bottom();
        self.ui.pulse_start = std::time::Instant::now();

        Some(TurnRequest {
            id: turn.id,
            mode,
            request,
            cancel_token: turn.cancel_token,
        })
    }

    /// Record the outcome of request `id`. Replies for requests that were
    /// cancelled or superseded are dropped; returns whether it was applied.
    /// API failures are recorded as the assistant's reply.
    pub fn complete_turn(&mut self, id: u64, result: Result<String, ChatError>) -> bool {
        if self.session.close_turn(id).is_none() {
            debug!(request_id = id, "Dropping stale reply");
            return false;
        }

        match result {
            Ok(reply) => self.session.conversation.push_assistant(reply),
            // Nothing was sent, so there is no reply to stand in for.
            Err(ChatError::MissingApiKey) => {
                info!(request_id = id, "Chat request skipped without an API key");
                self.session
                    .conversation
                    .push_app_error(error_turn_text(&ChatError::MissingApiKey));
            }
            // A failed query still answers the turn and stays in the history.
            Err(err) => {
                info!(request_id = id, error = %err, "Chat request failed");
                self.session.conversation.push_assistant(error_turn_text(&err));
            }
        }
        if self.ui.auto_scroll {
            self.ui.scroll_to_bottom();
        }
        true
    }

    pub fn add_info(&mut self, content: impl Into<String>) {
        self.session.conversation.push_app_info(content);
        self.ui.scroll_to_bottom();
    }

    /// Drop the in-flight request and empty the log.
    pub fn reset(&mut self) {
        self.session.cancel_pending();
        self.session.conversation.clear();
        self.ui.scroll_offset = 0;
        self.ui.auto_scroll = true;
        self.ui.set_status("Conversation reset");
    }
}
