//! Dialog rendering for the item editor form.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};

use super::state::{FormField, FormState};

/// Width of the form dialog.
const DIALOG_WIDTH: u16 = 52;

/// Label column width, including the trailing separator.
const LABEL_WIDTH: usize = 11;

/// Render the form dialog centered in `area`. Returns nothing when hidden.
pub fn render_form_dialog(frame: &mut Frame, state: &FormState, area: Rect) {
    let FormState::Open {
        mode,
        fields,
        focused,
        error,
    } = state
    else {
        return;
    };

    let input_width = (DIALOG_WIDTH as usize).saturating_sub(LABEL_WIDTH + 4);
    let mut lines = vec![Line::from("")];
    for field in FormField::all() {
        let is_focused = field == focused;
        let value = visible_tail(fields.text(*field), input_width.saturating_sub(1));
        let cursor = if is_focused { "▏" } else { "" };
        let value_style = if is_focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let label_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(POPUP_BORDER)
        };
        let padding = input_width.saturating_sub(value.chars().count() + cursor.chars().count());

        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled(format!("{value}{cursor}{}", " ".repeat(padding)), value_style),
        ]));
    }

    lines.push(Line::from(""));
    match error {
        Some(error) => lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(STATUS_ERROR),
        ))),
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        " Tab/↑↓: Field  Enter: Save  Esc: Cancel",
        Style::default().fg(POPUP_BORDER).add_modifier(Modifier::DIM),
    )));

    let height = lines.len() as u16 + 2;
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(Span::styled(mode.title(), Style::default().fg(ACCENT)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

/// Keep the end of `text` visible when it is wider than the input box.
fn visible_tail(text: &str, max_chars: usize) -> String {
    let count = text.chars().count();
    if count <= max_chars {
        text.to_string()
    } else {
        text.chars().skip(count - max_chars).collect()
    }
}
