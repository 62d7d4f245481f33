use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const TABLE_HINTS: &str =
    " a: Add │ e: Edit │ d: Delete │ 1-4: Sort │ c/C: Category │ /: Search │ q: Quit";
const SEARCH_HINTS: &str = " Type to search │ Backspace: Erase │ Enter/Esc: Done";

pub struct Footer<'a> {
    focus: Focus,
    save_error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(focus: Focus, save_error: Option<&'a str>) -> Self {
        Self { focus, save_error }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let (left, left_style) = match self.save_error {
            Some(error) => (
                format!(" Not saved: {error}"),
                Style::default().fg(STATUS_ERROR),
            ),
            None => {
                let hints = match self.focus {
                    Focus::Table => TABLE_HINTS,
                    Focus::Search => SEARCH_HINTS,
                };
                (hints.to_string(), text_style)
            }
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
