//! Markdown rendering for transcript messages.
//!
//! Messages are parsed with pulldown-cmark into logical lines, each carrying
//! a lead (role prefix, list marker, quote bar) and a hanging indent used
//! for its wrapped continuation rows.

mod wrap;

pub use wrap::wrap_spans;

use crate::core::message::{Message, TranscriptRole};
use crate::ui::theme::Theme;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

const USER_PREFIX: &str = "You: ";
const INFO_PREFIX: &str = "» ";
const ERROR_PREFIX: &str = "✗ ";
const QUOTE_BAR: &str = "│ ";
const RULE_WIDTH: usize = 24;

struct LogicalLine {
    lead: String,
    hang: String,
    spans: Vec<Span<'static>>,
}

fn role_prefix(role: TranscriptRole, theme: &Theme) -> Option<(&'static str, Style)> {
    match role {
        TranscriptRole::User => Some((USER_PREFIX, theme.user_prefix_style)),
        TranscriptRole::Assistant => None,
        TranscriptRole::AppInfo => Some((INFO_PREFIX, theme.app_info_style)),
        TranscriptRole::AppError => Some((ERROR_PREFIX, theme.app_error_style)),
    }
}

fn base_text_style(role: TranscriptRole, theme: &Theme) -> Style {
    match role {
        TranscriptRole::User => theme.user_text_style,
        TranscriptRole::Assistant => theme.assistant_text_style,
        TranscriptRole::AppInfo => theme.app_info_style,
        TranscriptRole::AppError => theme.app_error_style,
    }
}

struct MarkdownRenderer<'a> {
    theme: &'a Theme,
    lines: Vec<LogicalLine>,
    current: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    indent_stack: Vec<String>,
    list_stack: Vec<Option<u64>>,
    pending_marker: Option<String>,
    in_code_block: bool,
}

impl<'a> MarkdownRenderer<'a> {
    fn new(theme: &'a Theme, base: Style) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            current: Vec::new(),
            style_stack: vec![base],
            indent_stack: Vec::new(),
            list_stack: Vec::new(),
            pending_marker: None,
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn push_modifier(&mut self, modifier: Modifier) {
        let style = self.style().add_modifier(modifier);
        self.style_stack.push(style);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn hang(&self) -> String {
        self.indent_stack.concat()
    }

    fn lead(&mut self) -> String {
        match self.pending_marker.take() {
            Some(marker) => {
                let outer = self.indent_stack.len().saturating_sub(1);
                let mut lead = self.indent_stack[..outer].concat();
                lead.push_str(&marker);
                lead
            }
            None => self.hang(),
        }
    }

    fn push_line(&mut self, spans: Vec<Span<'static>>) {
        let lead = self.lead();
        let hang = self.hang();
        self.lines.push(LogicalLine { lead, hang, spans });
    }

    fn flush(&mut self) {
        if !self.current.is_empty() || self.pending_marker.is_some() {
            let spans = std::mem::take(&mut self.current);
            self.push_line(spans);
        }
    }

    fn blank_line(&mut self) {
        let last_is_blank = self
            .lines
            .last()
            .is_none_or(|line| line.spans.is_empty() && line.lead.trim().is_empty());
        if !last_is_blank {
            self.lines.push(LogicalLine {
                lead: String::new(),
                hang: String::new(),
                spans: Vec::new(),
            });
        }
    }

    fn push_text(&mut self, text: &str) {
        let style = self.style();
        self.current.push(Span::styled(text.to_string(), style));
    }

    fn push_code_block_text(&mut self, text: &str) {
        let style = self.theme.code_style;
        for line in text.lines() {
            self.push_line(vec![Span::styled(line.to_string(), style)]);
        }
    }

    fn start_item(&mut self) {
        self.flush();
        let marker = match self.list_stack.last_mut() {
            Some(Some(number)) => {
                let marker = format!("{number}. ");
                *number += 1;
                marker
            }
            _ => "• ".to_string(),
        };
        self.indent_stack.push(" ".repeat(marker.width()));
        self.pending_marker = Some(marker);
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { .. } => {
                    self.flush();
                    self.push_modifier(Modifier::BOLD);
                }
                Tag::BlockQuote(_) => {
                    self.flush();
                    self.indent_stack.push(QUOTE_BAR.to_string());
                }
                Tag::CodeBlock(_) => {
                    self.flush();
                    self.in_code_block = true;
                }
                Tag::List(start) => {
                    self.flush();
                    self.list_stack.push(start);
                }
                Tag::Item => self.start_item(),
                Tag::Emphasis => self.push_modifier(Modifier::ITALIC),
                Tag::Strong => self.push_modifier(Modifier::BOLD),
                Tag::Strikethrough => self.push_modifier(Modifier::CROSSED_OUT),
                Tag::Link { .. } => self.push_modifier(Modifier::UNDERLINED),
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph => {
                    self.flush();
                    if self.list_stack.is_empty() {
                        self.blank_line();
                    }
                }
                TagEnd::Heading(_) => {
                    self.pop_style();
                    self.flush();
                    self.blank_line();
                }
                TagEnd::BlockQuote(_) => {
                    self.flush();
                    self.indent_stack.pop();
                    self.blank_line();
                }
                TagEnd::CodeBlock => {
                    self.in_code_block = false;
                    self.blank_line();
                }
                TagEnd::List(_) => {
                    self.flush();
                    self.list_stack.pop();
                    if self.list_stack.is_empty() {
                        self.blank_line();
                    }
                }
                TagEnd::Item => {
                    self.flush();
                    self.indent_stack.pop();
                }
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                    self.pop_style();
                }
                _ => {}
            },
            Event::Text(text) => {
                if self.in_code_block {
                    self.push_code_block_text(&text);
                } else {
                    self.push_text(&text);
                }
            }
            Event::Code(code) => {
                let style = self.theme.code_style;
                self.current.push(Span::styled(code.to_string(), style));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => {
                let spans = std::mem::take(&mut self.current);
                self.push_line(spans);
            }
            Event::Rule => {
                self.flush();
                let style = self.theme.border_style;
                self.push_line(vec![Span::styled("─".repeat(RULE_WIDTH), style)]);
                self.blank_line();
            }
            Event::TaskListMarker(checked) => {
                self.push_text(if checked { "[x] " } else { "[ ] " });
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<LogicalLine> {
        self.flush();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.is_empty() && line.lead.trim().is_empty())
        {
            self.lines.pop();
        }
        self.lines
    }
}

fn parse_markdown(content: &str, theme: &Theme, base: Style) -> Vec<LogicalLine> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = MarkdownRenderer::new(theme, base);
    for event in Parser::new_ext(content, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// Render one transcript message into display rows no wider than `width`.
pub fn render_message(message: &Message, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let base = base_text_style(message.role, theme);
    let mut logical = parse_markdown(&message.content, theme, base);
    if logical.is_empty() {
        logical.push(LogicalLine {
            lead: String::new(),
            hang: String::new(),
            spans: Vec::new(),
        });
    }

    let prefix = role_prefix(message.role, theme);
    let prefix_indent = prefix.map(|(p, _)| " ".repeat(p.width())).unwrap_or_default();

    let mut rows = Vec::new();
    for (index, line) in logical.into_iter().enumerate() {
        let lead_width = prefix_indent.width() + line.lead.width().max(line.hang.width());
        let available = width.saturating_sub(lead_width).max(1);
        for (row_index, row) in wrap_spans(&line.spans, available).into_iter().enumerate() {
            let mut spans = Vec::with_capacity(row.len() + 2);
            match prefix {
                Some((text, style)) if index == 0 && row_index == 0 => {
                    spans.push(Span::styled(text, style));
                }
                _ if !prefix_indent.is_empty() => spans.push(Span::raw(prefix_indent.clone())),
                _ => {}
            }
            let indent = if row_index == 0 { &line.lead } else { &line.hang };
            if !indent.is_empty() {
                spans.push(Span::styled(indent.clone(), base));
            }
            spans.extend(row);
            rows.push(Line::from(spans));
        }
    }
    rows
}

/// Render the whole transcript, separating messages with a blank row.
pub fn render_transcript(messages: &[Message], theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (index, message) in messages.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.extend(render_message(message, theme, width));
    }
    lines
}

#[cfg(test)]
mod tests;
