use crate::ui::theme::Theme;
use std::time::Instant;
use tui_textarea::TextArea;

/// Upper bound on visible input rows before the textarea scrolls.
pub const MAX_INPUT_ROWS: u16 = 6;

/// Rows available to the transcript and rows it needs, recorded by the
/// renderer on every frame so scrolling can be clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscriptViewport {
    pub total_rows: u16,
    pub visible_rows: u16,
}

impl TranscriptViewport {
    pub fn max_offset(&self) -> u16 {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub theme: Theme,
    pub textarea: TextArea<'static>,
    /// Masked buffer for the API-key screen.
    pub key_input: String,
    pub status: Option<String>,
    pub scroll_offset: u16,
    pub auto_scroll: bool,
    pub viewport: TranscriptViewport,
    pub pulse_start: Instant,
    pub exit_requested: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        let mut state = Self {
            theme,
            textarea: TextArea::default(),
            key_input: String::new(),
            status: None,
            scroll_offset: 0,
            auto_scroll: true,
            viewport: TranscriptViewport::default(),
            pulse_start: Instant::now(),
            exit_requested: false,
        };
        state.configure_textarea();
        state
    }

    pub(crate) fn configure_textarea(&mut self) {
        let textarea_style = self
            .theme
            .input_text_style
            .patch(ratatui::style::Style::default().bg(self.theme.background_color));
        self.textarea.set_style(textarea_style);
        self.textarea
            .set_cursor_style(self.theme.input_cursor_style);
        self.textarea
            .set_cursor_line_style(ratatui::style::Style::default());
        self.textarea
            .set_placeholder_text("Type your message…");
    }

    pub fn input_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn clear_input(&mut self) {
        self.textarea = TextArea::default();
        self.configure_textarea();
    }

    /// Rows the input box needs, excluding borders.
    pub fn input_rows(&self) -> u16 {
        (self.textarea.lines().len() as u16).clamp(1, MAX_INPUT_ROWS)
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The offset actually rendered, honoring auto-scroll.
    pub fn effective_scroll_offset(&self) -> u16 {
        if self.auto_scroll {
            self.viewport.max_offset()
        } else {
            self.scroll_offset.min(self.viewport.max_offset())
        }
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll_offset = self.effective_scroll_offset().saturating_sub(rows);
        self.auto_scroll = false;
    }

    pub fn scroll_down(&mut self, rows: u16) {
        let target = self.effective_scroll_offset().saturating_add(rows);
        if target >= self.viewport.max_offset() {
            self.scroll_to_bottom();
        } else {
            self.scroll_offset = target;
            self.auto_scroll = false;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.viewport.max_offset();
        self.auto_scroll = true;
    }

    pub fn page_rows(&self) -> u16 {
        self.viewport.visible_rows.saturating_sub(1).max(1)
    }
}
