use crate::commands::{process_input, CommandResult};
use crate::core::app::{App, Screen, TurnRequest};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input as TAInput;

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Apply one key press to the app. A submitted chat message comes back as
/// the request to run.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<TurnRequest> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if is_ctrl(&key, 'c') {
        app.request_exit();
        return None;
    }

    match app.screen {
        Screen::ApiKey => {
            handle_api_key_screen(app, key);
            None
        }
        Screen::Selector => {
            handle_selector_screen(app, key);
            None
        }
        Screen::Chat => handle_chat_screen(app, key),
    }
}

/// Bracketed paste goes to whichever input the current screen has.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.screen {
        Screen::ApiKey => app
            .ui
            .key_input
            .push_str(text.trim_end_matches(['\r', '\n'])),
        Screen::Chat => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            app.ui.textarea.insert_str(normalized);
        }
        Screen::Selector => {}
    }
}

fn handle_api_key_screen(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let text = app.ui.key_input.clone();
            app.submit_api_key(&text);
        }
        KeyCode::Esc => app.request_exit(),
        KeyCode::Backspace => {
            app.ui.key_input.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.key_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.key_input.push(c);
        }
        _ => {}
    }
}

fn handle_selector_screen(app: &mut App, key: KeyEvent) {
    let form = &mut app.selector;
    match key.code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Up | KeyCode::Char('k') => form.move_up(),
        KeyCode::Down | KeyCode::Char('j') => form.move_down(),
        KeyCode::Left => form.adjust_temperature(-1),
        KeyCode::Right => form.adjust_temperature(1),
        KeyCode::Enter => app.start_chat(),
        KeyCode::Esc | KeyCode::Char('q') => app.request_exit(),
        _ => {}
    }
}

fn submit_input(app: &mut App) -> Option<TurnRequest> {
    let text = app.ui.input_text();
    if text.trim().is_empty() {
        return None;
    }
    match process_input(app, &text) {
        CommandResult::Continue => {
            app.ui.clear_input();
            None
        }
        CommandResult::ProcessAsMessage(message) => {
            // A refused turn keeps its text so it can be sent later.
            let turn = app.begin_turn(&message)?;
            app.ui.clear_input();
            Some(turn)
        }
    }
}

fn handle_chat_screen(app: &mut App, key: KeyEvent) -> Option<TurnRequest> {
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.ui.textarea.insert_newline();
        }
        KeyCode::Enter => return submit_input(app),
        KeyCode::Esc => app.back_to_selector(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.reset_conversation();
        }
        KeyCode::F(2) if key.modifiers.contains(KeyModifiers::SHIFT) => app.cycle_model(false),
        // Some terminals report Shift+F2 as F14.
        KeyCode::F(14) => app.cycle_model(false),
        KeyCode::F(2) => app.cycle_model(true),
        KeyCode::F(3) => app.adjust_temperature(-1),
        KeyCode::F(4) => app.adjust_temperature(1),
        KeyCode::PageUp => {
            let rows = app.ui.page_rows();
            app.ui.scroll_up(rows);
        }
        KeyCode::PageDown => {
            let rows = app.ui.page_rows();
            app.ui.scroll_down(rows);
        }
        KeyCode::Home => app.ui.scroll_to_top(),
        KeyCode::End => app.ui.scroll_to_bottom(),
        _ => {
            app.ui.textarea.input(TAInput::from(key));
        }
    }
    None
}
