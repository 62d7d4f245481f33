use crate::ui::app::Focus;
use crate::ui::inventory::InventoryState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Filter and search bar above the table.
pub struct Header<'a> {
    state: &'a InventoryState,
    focus: Focus,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a InventoryState, focus: Focus) -> Self {
        Self { state, focus }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let label_style = Style::default().fg(HEADER_SEPARATOR);

        let search_active = self.focus == Focus::Search;
        let search_style = if search_active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let cursor = if search_active { "▏" } else { "" };
        let search_text = if self.state.search_term.is_empty() && !search_active {
            "(none)".to_string()
        } else {
            format!("{}{}", self.state.search_term, cursor)
        };

        let line = Line::from(vec![
            Span::styled("  Category: ", label_style),
            Span::styled(self.state.category_filter.clone(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Search: ", label_style),
            Span::styled(search_text, search_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Sort: ", label_style),
            Span::styled(
                format!(
                    "{} {}",
                    self.state.sort.key.label(),
                    self.state.sort.direction.arrow()
                ),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
