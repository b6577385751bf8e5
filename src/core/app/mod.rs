use tracing::info;

use crate::auth::{clean_key, ApiKey, KeySource};
use crate::core::chat_client::ChatError;
use crate::core::mode::AssistantMode;
use crate::core::session::SessionSettings;
use crate::ui::theme::Theme;

pub mod conversation;
pub mod selector;
pub mod session;
pub mod ui_state;

pub use conversation::{error_turn_text, ConversationController, TurnRequest};
pub use selector::{SelectorField, SelectorForm};
pub use session::{PendingTurn, SessionContext};
pub use ui_state::{TranscriptViewport, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ApiKey,
    Selector,
    Chat,
}

/// Configuration parameters for initializing an App
pub struct AppInitConfig {
    /// `settings.mode` is set only when the command line picked a mode;
    /// the app then opens straight into the chat screen.
    pub settings: SessionSettings,
    /// Mode highlighted on the selector when nothing was started yet.
    pub preselected_mode: Option<AssistantMode>,
    pub models: Vec<String>,
    pub api_key: Option<ApiKey>,
    pub base_url: String,
    pub theme: Theme,
}

pub struct App {
    pub screen: Screen,
    pub session: SessionContext,
    pub selector: SelectorForm,
    pub ui: UiState,
    preselected_mode: Option<AssistantMode>,
}

impl App {
    pub fn new(init: AppInitConfig) -> Self {
        let AppInitConfig {
            settings,
            preselected_mode,
            models,
            api_key,
            base_url,
            theme,
        } = init;

        let selector = SelectorForm::new(preselected_mode, &models, &settings);
        let session = SessionContext::new(settings, models, api_key, base_url);
        let mut app = Self {
            screen: Screen::Selector,
            session,
            selector,
            ui: UiState::new(theme),
            preselected_mode,
        };
        app.screen = app.screen_after_auth();
        if app.screen == Screen::ApiKey {
            app.ui
                .set_status("No API key found. Paste one to continue (Esc to quit)");
        }
        app
    }

    fn screen_after_auth(&self) -> Screen {
        if self.session.api_key.is_none() {
            Screen::ApiKey
        } else if self.session.mode().is_some() {
            Screen::Chat
        } else {
            Screen::Selector
        }
    }

    pub fn conversation(&mut self) -> ConversationController<'_> {
        ConversationController::new(&mut self.session, &mut self.ui)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.session.api_key.as_ref().map(|key| key.key.as_str())
    }

    /// Accept a pasted key for this session only. Blank input keeps the
    /// screen up with an error status.
    pub fn submit_api_key(&mut self, text: &str) -> bool {
        let Some(key) = clean_key(text) else {
            self.ui.set_status("The API key cannot be empty");
            return false;
        };
        self.session.api_key = Some(ApiKey {
            key,
            source: KeySource::Pasted,
        });
        self.ui.key_input.clear();
        self.ui.clear_status();
        self.screen = self.screen_after_auth();
        info!(screen = ?self.screen, "API key accepted");
        true
    }

    /// Commit the selector form and open the chat screen.
    pub fn start_chat(&mut self) {
        let mode = self.selector.selected_mode();
        self.session.settings.mode = Some(mode);
        if let Some(model) = self.selector.selected_model() {
            self.session.settings.model = model.to_string();
        }
        self.session.set_temperature(self.selector.temperature);
        self.screen = Screen::Chat;
        self.ui.clear_status();
        self.ui.scroll_to_bottom();
        info!(
            mode = mode.slug(),
            model = %self.session.settings.model,
            temperature = self.session.settings.temperature,
            "Chat started"
        );
    }

    pub fn back_to_selector(&mut self) {
        if self.session.cancel_pending() {
            self.ui.set_status("Request cancelled");
        } else {
            self.ui.clear_status();
        }
        self.selector
            .load(self.preselected_mode, &self.session.settings);
        self.screen = Screen::Selector;
        info!("Returned to selector");
    }

    pub fn reset_conversation(&mut self) {
        self.conversation().reset();
    }

    pub fn begin_turn(&mut self, text: &str) -> Option<TurnRequest> {
        self.conversation().begin_turn(text)
    }

    pub fn complete_turn(&mut self, id: u64, result: Result<String, ChatError>) -> bool {
        self.conversation().complete_turn(id, result)
    }

    pub fn cycle_model(&mut self, forward: bool) {
        let model = self.session.cycle_model(forward).to_string();
        self.ui.set_status(format!("Model: {model}"));
    }

    pub fn adjust_temperature(&mut self, steps: i32) {
        let temperature = self.session.adjust_temperature(steps);
        self.ui.set_status(format!("Temperature: {temperature:.2}"));
    }

    /// Title of the chat pane, e.g. `Jigsaw/cooperation Chatbot`.
    pub fn chat_title(&self) -> String {
        match self.session.mode() {
            Some(mode) => format!("{} Chatbot", mode.label()),
            None => "Chatbot".to_string(),
        }
    }

    pub fn request_exit(&mut self) {
        self.session.cancel_pending();
        self.ui.exit_requested = true;
    }

    pub fn should_exit(&self) -> bool {
        self.ui.exit_requested
    }
}

#[cfg(test)]
mod tests;
