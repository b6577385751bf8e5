use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Transcript
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub app_info_style: Style,
    pub app_error_style: Style,
    pub code_style: Style,

    // Chrome
    pub title_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub selection_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub hint_style: Style,
    pub status_style: Style,
    pub waiting_indicator_style: Style,

    // Input area
    pub input_text_style: Style,
    pub input_cursor_style: Style,
}

impl Theme {
    pub const NAMES: [&'static str; 2] = ["dark", "light"];

    pub fn dark_default() -> Self {
        Theme {
            id: "dark",
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::White),
            app_info_style: Style::default().fg(Color::DarkGray),
            app_error_style: Style::default().fg(Color::LightRed),
            code_style: Style::default().fg(Color::Yellow),

            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(Color::Cyan),
            selection_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::Gray),
            value_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::DarkGray),
            status_style: Style::default().fg(Color::Yellow),
            waiting_indicator_style: Style::default().fg(Color::Cyan),

            input_text_style: Style::default().fg(Color::White),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn light() -> Self {
        Theme {
            id: "light",
            background_color: Color::White,
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Black),
            app_info_style: Style::default().fg(Color::Gray),
            app_error_style: Style::default().fg(Color::Red),
            code_style: Style::default().fg(Color::Magenta),

            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::Gray),
            focused_border_style: Style::default().fg(Color::Blue),
            selection_style: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            label_style: Style::default().fg(Color::DarkGray),
            value_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::Gray),
            status_style: Style::default().fg(Color::Red),
            waiting_indicator_style: Style::default().fg(Color::Blue),

            input_text_style: Style::default().fg(Color::Black),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dark" => Some(Self::dark_default()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}
