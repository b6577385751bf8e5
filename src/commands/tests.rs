use super::*;
use crate::core::app::Screen;
use crate::core::message::TranscriptRole;
use crate::core::mode::AssistantMode;
use crate::utils::test_utils::create_chat_app;

fn last_info(app: &App) -> &str {
    let message = app
        .session
        .conversation
        .messages()
        .last()
        .expect("message");
    assert_eq!(message.role, TranscriptRole::AppInfo);
    &message.content
}

#[test]
fn plain_text_and_unknown_commands_are_messages() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    assert!(matches!(
        process_input(&mut app, "hello"),
        CommandResult::ProcessAsMessage(text) if text == "hello"
    ));
    assert!(matches!(
        process_input(&mut app, "/shrug ok"),
        CommandResult::ProcessAsMessage(text) if text == "/shrug ok"
    ));
    assert!(matches!(
        process_input(&mut app, "/"),
        CommandResult::ProcessAsMessage(_)
    ));
}

#[test]
fn help_lists_every_command_as_info() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    assert!(matches!(process_input(&mut app, "/HELP"), CommandResult::Continue));
    let help = last_info(&app);
    for command in all_commands() {
        assert!(help.contains(command.usage), "{}", command.name);
    }
    assert_eq!(app.session.conversation.api_turns().count(), 0);
}

#[test]
fn model_switches_only_to_known_models() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    process_input(&mut app, "/model gpt-4o-mini");
    assert_eq!(app.session.settings.model, "gpt-4o-mini");

    process_input(&mut app, "/model gpt-9");
    assert_eq!(app.session.settings.model, "gpt-4o-mini");
    assert!(app
        .ui
        .status
        .as_deref()
        .is_some_and(|s| s.starts_with("Unknown model 'gpt-9'")));

    process_input(&mut app, "/model");
    assert!(last_info(&app).contains("**gpt-4o-mini** (current)"));
}

#[test]
fn temp_validates_range() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    process_input(&mut app, "/temp 0.33");
    assert_eq!(app.session.settings.temperature, 0.35);

    process_input(&mut app, "/temp 1.5");
    assert_eq!(app.session.settings.temperature, 0.35);
    assert!(app
        .ui
        .status
        .as_deref()
        .is_some_and(|s| s.starts_with("Invalid temperature")));
}

#[test]
fn mode_shows_prompt() {
    let mut app = create_chat_app(AssistantMode::Clarification);
    process_input(&mut app, "/mode");
    let info = last_info(&app);
    assert!(info.contains("Clarification"));
    assert!(info.contains(AssistantMode::Clarification.system_prompt().expect("prompt")));
}

#[test]
fn navigation_commands() {
    let mut app = create_chat_app(AssistantMode::Jigsaw);
    app.session.conversation.push_user("hi");
    process_input(&mut app, "/reset");
    assert!(app.session.conversation.is_empty());

    process_input(&mut app, "/back");
    assert_eq!(app.screen, Screen::Selector);

    process_input(&mut app, "/quit");
    assert!(app.should_exit());
}
