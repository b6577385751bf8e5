use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct UiError {
    message: String,
}

impl UiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UiError {}

impl From<io::Error> for UiError {
    fn from(err: io::Error) -> Self {
        UiError::new(err.to_string())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum MaskedEdit {
    Continue,
    Submit,
    Cancel,
}

/// Apply one key to the masked buffer.
fn apply_masked_key(buffer: &mut String, code: KeyCode, modifiers: KeyModifiers) -> MaskedEdit {
    match code {
        KeyCode::Enter => MaskedEdit::Submit,
        KeyCode::Esc => MaskedEdit::Cancel,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => MaskedEdit::Cancel,
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.clear();
            MaskedEdit::Continue
        }
        KeyCode::Backspace => {
            buffer.pop();
            MaskedEdit::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            MaskedEdit::Continue
        }
        _ => MaskedEdit::Continue,
    }
}

fn redraw_masked(prompt: &str, len: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\r\x1b[2K{prompt}{}", "*".repeat(len))?;
    stdout.flush()
}

/// Read a secret from the terminal, echoing `*` for each character.
pub fn prompt_masked_input(prompt: &str) -> Result<String, UiError> {
    enable_raw_mode()?;
    let result = read_masked(prompt);
    let restore = disable_raw_mode();
    println!();
    restore?;
    result
}

fn read_masked(prompt: &str) -> Result<String, UiError> {
    let mut buffer = String::new();
    redraw_masked(prompt, 0)?;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match apply_masked_key(&mut buffer, key.code, key.modifiers) {
                    MaskedEdit::Submit => return Ok(buffer),
                    MaskedEdit::Cancel => return Err(UiError::new("Cancelled")),
                    MaskedEdit::Continue => {}
                }
            }
            Event::Paste(text) => buffer.push_str(text.trim_end_matches(['\r', '\n'])),
            _ => continue,
        }
        redraw_masked(prompt, buffer.chars().count())?;
    }
}

pub fn prompt_confirmation(question: &str) -> Result<bool, UiError> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_buffer_edits() {
        let mut buffer = String::new();
        for c in "sk-ab".chars() {
            assert_eq!(
                apply_masked_key(&mut buffer, KeyCode::Char(c), KeyModifiers::NONE),
                MaskedEdit::Continue
            );
        }
        apply_masked_key(&mut buffer, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(buffer, "sk-a");

        assert_eq!(
            apply_masked_key(&mut buffer, KeyCode::Enter, KeyModifiers::NONE),
            MaskedEdit::Submit
        );
        assert_eq!(
            apply_masked_key(&mut buffer, KeyCode::Char('c'), KeyModifiers::CONTROL),
            MaskedEdit::Cancel
        );
        assert_eq!(buffer, "sk-a");

        apply_masked_key(&mut buffer, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(buffer.is_empty());
    }
}
