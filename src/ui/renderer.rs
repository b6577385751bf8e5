use crate::core::app::{App, Screen, SelectorField};
use crate::core::session::{MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::ui::markdown::render_transcript;
use crate::ui::picker::PickerState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub const APP_TITLE: &str = "Educational Assistant Workbench";
const SIDEBAR_WIDTH: u16 = 30;

const SELECTOR_HINT: &str =
    "Tab/Shift+Tab switch field • ↑/↓ choose • ←/→ temperature • Enter start • Esc quit";

const CHAT_HINTS: [(&str, &str); 7] = [
    ("Enter", "send"),
    ("Alt+Enter", "new line"),
    ("Esc", "back to modes"),
    ("Ctrl+R", "reset chat"),
    ("F2/Shift+F2", "model"),
    ("F3/F4", "temperature"),
    ("Ctrl+C", "quit"),
];

pub fn ui(f: &mut Frame, app: &mut App) {
    let background = Block::default().style(Style::default().bg(app.ui.theme.background_color));
    f.render_widget(background, f.area());

    match app.screen {
        Screen::ApiKey => render_api_key(f, app),
        Screen::Selector => render_selector(f, app),
        Screen::Chat => render_chat(f, app),
    }
}

fn bordered<'a>(title: impl Into<Line<'a>>, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        theme.focused_border_style
    } else {
        theme.border_style
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.into())
        .title_style(theme.title_style)
}

fn status_line(app: &App) -> Line<'static> {
    let theme = &app.ui.theme;
    match &app.ui.status {
        Some(status) => Line::from(Span::styled(status.clone(), theme.status_style)),
        None => Line::default(),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_api_key(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let area = centered(f.area(), 64, 9);
    f.render_widget(Clear, area);

    let block = bordered("OpenAI API key", true, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let masked = "*".repeat(app.ui.key_input.chars().count());
    let lines = vec![
        Line::from(Span::styled(APP_TITLE, theme.title_style)),
        Line::default(),
        Line::from(Span::styled(
            "Paste your API key. It is kept for this session only;",
            theme.label_style,
        )),
        Line::from(Span::styled(
            "run `workbench auth` to store it in the keyring.",
            theme.label_style,
        )),
        Line::from(vec![
            Span::styled("> ", theme.label_style),
            Span::styled(masked, theme.value_style),
        ]),
        status_line(app),
        Line::from(Span::styled("Enter continue • Esc quit", theme.hint_style)),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    if let Some(cursor_x) = key_cursor_x(inner, app.ui.key_input.chars().count()) {
        f.set_cursor_position((cursor_x, inner.y + 4));
    }
}

/// Column just past the masked key, or `None` once it leaves the box.
fn key_cursor_x(inner: Rect, key_len: usize) -> Option<u16> {
    let cursor_x = u16::try_from(key_len)
        .ok()?
        .checked_add(inner.x.saturating_add(2))?;
    (cursor_x < inner.x.saturating_add(inner.width)).then_some(cursor_x)
}

fn render_picker(f: &mut Frame, area: Rect, picker: &PickerState, focused: bool, theme: &Theme) {
    let items: Vec<ListItem> = picker
        .items
        .iter()
        .map(|item| ListItem::new(Line::from(Span::styled(item.label.clone(), theme.value_style))))
        .collect();
    let list = List::new(items)
        .block(bordered(picker.title.clone(), focused, theme))
        .highlight_style(theme.selection_style)
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(picker.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_selector(f: &mut Frame, app: &App) {
    let theme = &app.ui.theme;
    let form = &app.selector;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(Span::styled(APP_TITLE, theme.title_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style));
    f.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_picker(
        f,
        columns[0],
        &form.modes,
        form.focus == SelectorField::Mode,
        theme,
    );

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(columns[1]);
    render_picker(
        f,
        right[0],
        &form.models,
        form.focus == SelectorField::Model,
        theme,
    );

    let ratio = ((form.temperature - MIN_TEMPERATURE) / (MAX_TEMPERATURE - MIN_TEMPERATURE))
        .clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(bordered(
            "Temperature",
            form.focus == SelectorField::Temperature,
            theme,
        ))
        .gauge_style(theme.focused_border_style)
        .ratio(ratio)
        .label(format!("{:.2}", form.temperature));
    f.render_widget(gauge, right[1]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(SELECTOR_HINT, theme.hint_style))),
        rows[2],
    );
    f.render_widget(Paragraph::new(status_line(app)), rows[3]);
}

fn sidebar_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.ui.theme;
    let settings = &app.session.settings;
    let mode_label = settings.mode.map(|m| m.label()).unwrap_or("-");

    let mut lines = vec![
        Line::from(Span::styled("Mode", theme.label_style)),
        Line::from(Span::styled(mode_label.to_string(), theme.value_style)),
        Line::default(),
        Line::from(Span::styled("Model", theme.label_style)),
        Line::from(Span::styled(settings.model.clone(), theme.value_style)),
        Line::default(),
        Line::from(Span::styled("Temperature", theme.label_style)),
        Line::from(Span::styled(
            format!("{:.2}", settings.temperature),
            theme.value_style,
        )),
        Line::default(),
    ];
    if let Some(key) = &app.session.api_key {
        lines.push(Line::from(Span::styled("API key", theme.label_style)));
        lines.push(Line::from(Span::styled(key.source.describe(), theme.value_style)));
        lines.push(Line::default());
    }
    for (key, action) in CHAT_HINTS {
        lines.push(Line::from(vec![
            Span::styled(key, theme.value_style),
            Span::styled(format!(" {action}"), theme.hint_style),
        ]));
    }
    lines.push(Line::from(Span::styled("/help for commands", theme.hint_style)));
    lines
}

fn waiting_line(app: &App) -> Line<'static> {
    let theme = &app.ui.theme;
    // Pulse through three glyphs, two cycles per second.
    let elapsed = app.ui.pulse_start.elapsed().as_millis() as f32 / 1000.0;
    let phase = (elapsed * 2.0) % 2.0;
    let intensity = if phase < 1.0 { phase } else { 2.0 - phase };
    let symbol = if intensity < 0.33 {
        "○"
    } else if intensity < 0.66 {
        "◐"
    } else {
        "●"
    };
    Line::from(vec![
        Span::styled(symbol, theme.waiting_indicator_style),
        Span::styled(" Waiting for reply… (Esc to cancel)", theme.hint_style),
    ])
}

fn render_chat(f: &mut Frame, app: &mut App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(f.area());

    let sidebar = Paragraph::new(sidebar_lines(app))
        .block(bordered("Settings", false, &app.ui.theme))
        .wrap(Wrap { trim: true });
    f.render_widget(sidebar, columns[0]);

    let input_height = app.ui.input_rows() + 2;
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(input_height),
        ])
        .split(columns[1]);

    let transcript_block = bordered(app.chat_title(), false, &app.ui.theme);
    let inner = transcript_block.inner(main[0]);
    let lines = render_transcript(
        app.session.conversation.messages(),
        &app.ui.theme,
        inner.width as usize,
    );
    app.ui.viewport.total_rows = lines.len().min(u16::MAX as usize) as u16;
    app.ui.viewport.visible_rows = inner.height;
    let offset = app.ui.effective_scroll_offset();
    let transcript = Paragraph::new(lines)
        .block(transcript_block)
        .scroll((offset, 0));
    f.render_widget(transcript, main[0]);

    let status = if app.session.is_waiting() {
        waiting_line(app)
    } else {
        status_line(app)
    };
    f.render_widget(Paragraph::new(status), main[1]);

    let input_block = bordered(
        "Message (Enter to send, Alt+Enter for new line)",
        true,
        &app.ui.theme,
    );
    app.ui.textarea.set_block(input_block);
    f.render_widget(&app.ui.textarea, main[2]);
}
