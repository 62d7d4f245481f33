use crate::ui::inventory::Notice;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MAX_WIDTH: u16 = 60;

/// Blocking notice popup. Drawn last so it covers the form.
pub fn render_notice(frame: &mut Frame, notice: &Notice, area: Rect) {
    let message = notice.message();
    let hint = "Enter/Esc: OK";
    let width = (message.chars().count() as u16)
        .max(hint.chars().count() as u16)
        .saturating_add(4)
        .min(MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1) as usize;
    let message_rows = message.chars().count().div_ceil(inner_width) as u16;
    let height = message_rows + 5;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(Span::styled(
            hint,
            Style::default().fg(POPUP_BORDER).add_modifier(Modifier::DIM),
        )),
    ];

    let popup = centered_rect_by_size(area, width, height);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title()),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
