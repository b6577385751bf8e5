use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Split text into alternating runs of whitespace and non-whitespace.
fn split_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;
    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                runs.push(&text[start..idx]);
                start = idx;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        runs.push(&text[start..]);
    }
    runs
}

fn push_piece(row: &mut Vec<Span<'static>>, piece: &str, style: Style) {
    if let Some(last) = row.last_mut() {
        if last.style == style {
            last.content.to_mut().push_str(piece);
            return;
        }
    }
    row.push(Span::styled(piece.to_string(), style));
}

fn trim_row_end(row: &mut Vec<Span<'static>>) {
    while let Some(last) = row.last_mut() {
        let trimmed_len = last.content.trim_end().len();
        if trimmed_len == 0 {
            row.pop();
        } else {
            last.content.to_mut().truncate(trimmed_len);
            break;
        }
    }
}

/// Split a token wider than `max_width` into chunks that fit.
fn hard_split(token: &str, max_width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut width = 0;
    for (idx, ch) in token.char_indices() {
        let cw = ch.width().unwrap_or(0);
        if width + cw > max_width && idx > start {
            chunks.push(&token[start..idx]);
            start = idx;
            width = 0;
        }
        width += cw;
    }
    chunks.push(&token[start..]);
    chunks
}

/// Greedy word wrap that keeps span styles. Words wider than a row are
/// broken at the row width; whitespace at a wrap point is dropped.
pub fn wrap_spans(spans: &[Span<'static>], max_width: usize) -> Vec<Vec<Span<'static>>> {
    let max_width = max_width.max(1);
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0usize;

    for span in spans {
        let style = span.style;
        for piece in split_runs(&span.content) {
            let piece_width = piece.width();
            if piece.chars().all(char::is_whitespace) {
                if row_width == 0 && !rows.is_empty() {
                    continue;
                }
                if row_width + piece_width > max_width {
                    trim_row_end(&mut row);
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                    continue;
                }
                push_piece(&mut row, piece, style);
                row_width += piece_width;
                continue;
            }

            if row_width + piece_width <= max_width {
                push_piece(&mut row, piece, style);
                row_width += piece_width;
                continue;
            }

            if row_width > 0 {
                trim_row_end(&mut row);
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            let chunks = hard_split(piece, max_width);
            let last = chunks.len() - 1;
            for (i, chunk) in chunks.into_iter().enumerate() {
                push_piece(&mut row, chunk, style);
                if i < last {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row_width = chunk.width();
                }
            }
        }
    }

    if !row.is_empty() || rows.is_empty() {
        rows.push(row);
    }
    rows
}
