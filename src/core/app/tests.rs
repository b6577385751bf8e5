use super::*;
use crate::api::ChatMessage;
use crate::core::message::TranscriptRole;
use crate::utils::test_utils::{create_chat_app, create_test_app, test_init_config};

#[test]
fn missing_key_opens_key_screen() {
    let mut init = test_init_config(Some(AssistantMode::Jigsaw));
    init.api_key = None;
    let mut app = App::new(init);
    assert_eq!(app.screen, Screen::ApiKey);

    assert!(!app.submit_api_key("   "));
    assert_eq!(app.screen, Screen::ApiKey);
    assert_eq!(app.ui.status.as_deref(), Some("The API key cannot be empty"));

    assert!(app.submit_api_key("  sk-pasted\n"));
    assert_eq!(app.api_key(), Some("sk-pasted"));
    // A mode given on the command line skips the selector.
    assert_eq!(app.screen, Screen::Chat);
}

#[test]
fn key_screen_leads_to_selector_without_mode() {
    let mut init = test_init_config(None);
    init.api_key = None;
    let mut app = App::new(init);
    assert!(app.submit_api_key("sk-x"));
    assert_eq!(app.screen, Screen::Selector);
    assert_eq!(
        app.session.api_key.as_ref().map(|k| k.source),
        Some(KeySource::Pasted)
    );
}

#[test]
fn start_commits_form_values() {
    let mut app = create_test_app();
    assert_eq!(app.screen, Screen::Selector);

    app.selector.move_down();
    app.selector.focus_next();
    app.selector.move_down();
    app.selector.adjust_temperature(-4);
    app.start_chat();

    assert_eq!(app.screen, Screen::Chat);
    assert_eq!(app.session.mode(), Some(AssistantMode::SelfAssessment));
    assert_eq!(app.session.settings.model, "gpt-4o-mini");
    assert_eq!(app.session.settings.temperature, 0.5);
    assert_eq!(app.chat_title(), "Self-assessment Chatbot");
}

#[test]
fn config_default_mode_is_only_a_preselection() {
    let mut init = test_init_config(None);
    init.preselected_mode = Some(AssistantMode::Clarification);
    let app = App::new(init);
    assert_eq!(app.screen, Screen::Selector);
    assert_eq!(app.selector.selected_mode(), AssistantMode::Clarification);
    assert_eq!(app.session.mode(), None);
}

#[test]
fn begin_turn_builds_routed_request() {
    let mut app = create_chat_app(AssistantMode::Jigsaw);
    assert!(app.begin_turn("   \n").is_none());
    assert!(app.session.conversation.is_empty());

    let turn = app.begin_turn("Plan our group work").expect("turn");
    assert_eq!(turn.mode, AssistantMode::Jigsaw);
    assert_eq!(turn.request.model, "gpt-4o");
    assert_eq!(turn.request.temperature, 0.7);
    assert_eq!(
        turn.request.messages,
        vec![
            ChatMessage::new(
                "system",
                AssistantMode::Jigsaw.system_prompt().expect("prompt")
            ),
            ChatMessage::new("user", "Plan our group work"),
        ]
    );
    assert!(app.session.is_waiting());
}

#[test]
fn second_turn_is_refused_while_waiting() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    let first = app.begin_turn("one").expect("turn");
    assert!(app.begin_turn("two").is_none());
    assert_eq!(app.session.conversation.len(), 1);
    assert!(app.ui.status.is_some());

    assert!(app.complete_turn(first.id, Ok("reply".into())));
    let second = app.begin_turn("two").expect("turn");
    assert_ne!(second.id, first.id);
    let roles: Vec<_> = second.request.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["user", "assistant", "user"]);
}

#[test]
fn failed_reply_is_recorded_and_sent_with_the_history() {
    let mut app = create_chat_app(AssistantMode::Clarification);
    let turn = app.begin_turn("hi").expect("turn");
    assert!(app.complete_turn(turn.id, Err(ChatError::EmptyResponse)));

    let last = app.session.conversation.messages().last().expect("message");
    assert_eq!(last.role, TranscriptRole::Assistant);
    assert_eq!(
        last.content,
        "⚠️ Error querying OpenAI: the API returned no message content"
    );

    let next = app.begin_turn("again").expect("turn");
    let sent: Vec<(&str, &str)> = next
        .request
        .messages
        .iter()
        .map(|m| (m.role.as_str(), m.content.as_str()))
        .collect();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[0].0, "system");
    assert_eq!(sent[1], ("user", "hi"));
    assert_eq!(
        sent[2],
        (
            "assistant",
            "⚠️ Error querying OpenAI: the API returned no message content"
        )
    );
    assert_eq!(sent[3], ("user", "again"));
}

#[test]
fn missing_key_failure_is_a_notice_not_a_reply() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    let turn = app.begin_turn("hi").expect("turn");
    assert!(app.complete_turn(turn.id, Err(ChatError::MissingApiKey)));

    let last = app.session.conversation.messages().last().expect("message");
    assert_eq!(last.role, TranscriptRole::AppError);
    let next = app.begin_turn("again").expect("turn");
    let roles: Vec<_> = next.request.messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["user", "user"]);
}

#[test]
fn reset_drops_in_flight_reply() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    let turn = app.begin_turn("hello").expect("turn");
    app.reset_conversation();

    assert!(turn.cancel_token.is_cancelled());
    assert!(app.session.conversation.is_empty());
    assert!(!app.complete_turn(turn.id, Ok("late".into())));
    assert!(app.session.conversation.is_empty());
}

#[test]
fn back_keeps_log_and_cancels_request() {
    let mut app = create_chat_app(AssistantMode::FeedbackOnFeedback);
    let done = app.begin_turn("first").expect("turn");
    app.complete_turn(done.id, Ok("answer".into()));
    let pending = app.begin_turn("second").expect("turn");

    app.back_to_selector();
    assert_eq!(app.screen, Screen::Selector);
    assert!(pending.cancel_token.is_cancelled());
    assert!(!app.complete_turn(pending.id, Ok("late".into())));
    assert_eq!(app.session.conversation.len(), 3);
    assert_eq!(
        app.selector.selected_mode(),
        AssistantMode::FeedbackOnFeedback
    );

    app.start_chat();
    assert_eq!(app.session.conversation.len(), 3);
    assert!(!app.session.is_waiting());
}

#[test]
fn sidebar_controls_apply_to_next_request() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    app.cycle_model(true);
    assert_eq!(app.session.settings.model, "gpt-4o-mini");
    app.cycle_model(false);
    app.cycle_model(false);
    assert_eq!(app.session.settings.model, "gpt-3.5-turbo-0125");

    app.adjust_temperature(-20);
    assert_eq!(app.session.settings.temperature, 0.0);
    app.adjust_temperature(3);

    let turn = app.begin_turn("go").expect("turn");
    assert_eq!(turn.request.model, "gpt-3.5-turbo-0125");
    assert_eq!(turn.request.temperature, 0.15);
}

#[test]
fn exit_cancels_pending_request() {
    let mut app = create_chat_app(AssistantMode::WriteUp);
    let turn = app.begin_turn("bye").expect("turn");
    app.request_exit();
    assert!(app.should_exit());
    assert!(turn.cancel_token.is_cancelled());
}
