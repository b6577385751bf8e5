use super::*;
use ratatui::style::Modifier;

fn rows_text(lines: &[Line<'static>]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect()
}

fn render(message: Message, width: usize) -> Vec<String> {
    rows_text(&render_message(&message, &Theme::dark_default(), width))
}

#[test]
fn user_prefix_hangs_over_wrapped_rows() {
    let rows = render(Message::user("one two three four"), 14);
    assert_eq!(rows, vec!["You: one two", "     three", "     four"]);
}

#[test]
fn assistant_paragraphs_are_separated() {
    let rows = render(Message::assistant("First.\n\nSecond."), 40);
    assert_eq!(rows, vec!["First.", "", "Second."]);
}

#[test]
fn lists_get_markers_and_hanging_indent() {
    let rows = render(Message::assistant("- alpha beta gamma\n- delta"), 12);
    assert_eq!(rows, vec!["• alpha beta", "  gamma", "• delta"]);

    let rows = render(Message::assistant("3. three\n4. four"), 20);
    assert_eq!(rows, vec!["3. three", "4. four"]);
}

#[test]
fn nested_lists_indent_further() {
    let rows = render(Message::assistant("- outer\n  - inner"), 20);
    assert_eq!(rows, vec!["• outer", "  • inner"]);
}

#[test]
fn code_blocks_keep_their_lines() {
    let rows = render(
        Message::assistant("Run:\n\n```\nfn main() {\n    go();\n}\n```"),
        40,
    );
    assert_eq!(rows, vec!["Run:", "", "fn main() {", "    go();", "}"]);
}

#[test]
fn inline_styles_are_applied() {
    let theme = Theme::dark_default();
    let lines = render_message(
        &Message::assistant("a **bold** and `code`"),
        &theme,
        40,
    );
    let spans = &lines[0].spans;
    let bold = spans.iter().find(|s| s.content == "bold").expect("bold span");
    assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    let code = spans.iter().find(|s| s.content == "code").expect("code span");
    assert_eq!(code.style, theme.code_style);
}

#[test]
fn quotes_carry_a_bar() {
    let rows = render(Message::assistant("> quoted text"), 40);
    assert_eq!(rows, vec!["│ quoted text"]);
}

#[test]
fn app_errors_use_error_prefix_and_style() {
    let theme = Theme::dark_default();
    let lines = render_message(&Message::app_error("boom"), &theme, 40);
    assert_eq!(rows_text(&lines), vec!["✗ boom"]);
    assert_eq!(lines[0].spans[0].style, theme.app_error_style);
}

#[test]
fn empty_message_still_takes_a_row() {
    assert_eq!(render(Message::assistant(""), 10), vec![""]);
}

#[test]
fn transcript_separates_messages() {
    let messages = vec![Message::user("hi"), Message::assistant("hello")];
    let lines = render_transcript(&messages, &Theme::dark_default(), 40);
    assert_eq!(rows_text(&lines), vec!["You: hi", "", "hello"]);
}
