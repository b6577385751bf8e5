use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::auth::ApiKey;
use crate::core::message::Conversation;
use crate::core::mode::AssistantMode;
use crate::core::session::{step_temperature, SessionSettings};

/// The request currently awaiting a reply.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub id: u64,
    pub cancel_token: CancellationToken,
}

pub struct SessionContext {
    pub settings: SessionSettings,
    pub models: Vec<String>,
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub conversation: Conversation,
    pub pending: Option<PendingTurn>,
    pub next_request_id: u64,
}

impl SessionContext {
    pub fn new(
        settings: SessionSettings,
        models: Vec<String>,
        api_key: Option<ApiKey>,
        base_url: String,
    ) -> Self {
        Self {
            settings,
            models,
            api_key,
            base_url,
            conversation: Conversation::new(),
            pending: None,
            next_request_id: 1,
        }
    }

    pub fn mode(&self) -> Option<AssistantMode> {
        self.settings.mode
    }

    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Callers check [`is_waiting`](Self::is_waiting) first.
    pub(crate) fn open_turn(&mut self) -> PendingTurn {
        let turn = PendingTurn {
            id: self.next_request_id,
            cancel_token: CancellationToken::new(),
        };
        self.next_request_id += 1;
        self.pending = Some(turn.clone());
        turn
    }

    /// Take the pending turn if `id` still identifies it.
    pub(crate) fn close_turn(&mut self, id: u64) -> Option<PendingTurn> {
        match &self.pending {
            Some(turn) if turn.id == id => self.pending.take(),
            _ => None,
        }
    }

    /// Cancel the in-flight request, if any. Its reply will be dropped.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(turn) => {
                debug!(request_id = turn.id, "Cancelling in-flight request");
                turn.cancel_token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn set_model(&mut self, model: &str) -> Result<(), String> {
        let model = model.trim();
        if self.models.iter().any(|m| m == model) {
            self.settings.model = model.to_string();
            Ok(())
        } else {
            Err(format!(
                "Unknown model '{}'. Available: {}",
                model,
                self.models.join(", ")
            ))
        }
    }

    /// Move to the next (or previous) model, wrapping around the list.
    pub fn cycle_model(&mut self, forward: bool) -> &str {
        if !self.models.is_empty() {
            let len = self.models.len();
            let current = self
                .models
                .iter()
                .position(|m| *m == self.settings.model)
                .unwrap_or(0);
            let next = if forward {
                (current + 1) % len
            } else {
                (current + len - 1) % len
            };
            self.settings.model = self.models[next].clone();
        }
        &self.settings.model
    }

    pub fn adjust_temperature(&mut self, steps: i32) -> f64 {
        self.settings.temperature = step_temperature(self.settings.temperature, steps);
        self.settings.temperature
    }

    pub fn set_temperature(&mut self, value: f64) {
        self.settings.set_temperature(value);
    }
}
