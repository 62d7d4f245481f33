use crate::config::DisplayConfig;
use crate::inventory::{is_low_stock, InventoryItem, SortConfig, SortKey};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, LOW_STOCK, PRICE,
};
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

const COLUMN_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(35),
    Constraint::Percentage(25),
    Constraint::Percentage(20),
    Constraint::Percentage(20),
];

/// Inventory table over the derived view.
pub struct InventoryTable<'a> {
    rows: Vec<&'a InventoryItem>,
    sort: SortConfig,
    display: &'a DisplayConfig,
}

impl<'a> InventoryTable<'a> {
    pub fn new(rows: Vec<&'a InventoryItem>, sort: SortConfig, display: &'a DisplayConfig) -> Self {
        Self {
            rows,
            sort,
            display,
        }
    }

    pub fn widget(&self) -> Table<'a> {
        let header = Row::new(SortKey::all().iter().enumerate().map(|(index, key)| {
            Cell::from(column_title(index, *key, self.sort))
        }))
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

        let rows = self.rows.iter().map(|item| {
            let low = is_low_stock(&item.quantity, self.display.low_stock_threshold);
            let quantity_style = if low {
                Style::default().fg(LOW_STOCK).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            Row::new(vec![
                Cell::from(item.name.clone()),
                Cell::from(item.category.clone()),
                Cell::from(Span::styled(item.quantity.clone(), quantity_style)),
                Cell::from(Span::styled(
                    format_price(&self.display.currency_symbol, item.price),
                    Style::default().fg(PRICE),
                )),
            ])
            .style(Style::default().fg(HEADER_TEXT))
        });

        let title = format!(" Inventory ({}) ", self.rows.len());
        Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ")
            .block(
                Block::default()
                    .title(Span::styled(title, Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// `"3 Quantity ▲"` on the sorted column, `"3 Quantity"` elsewhere.
fn column_title(index: usize, key: SortKey, sort: SortConfig) -> Line<'static> {
    let mut title = format!("{} {}", index + 1, key.label());
    if key == sort.key {
        title.push(' ');
        title.push_str(sort.direction.arrow());
    }
    Line::from(title)
}

pub fn format_price(symbol: &str, price: f64) -> String {
    format!("{symbol}{price}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::SortDirection;

    #[test]
    fn arrow_only_on_sorted_column() {
        let sort = SortConfig {
            key: SortKey::Price,
            direction: SortDirection::Descending,
        };
        assert_eq!(column_title(3, SortKey::Price, sort).to_string(), "4 Price ▼");
        assert_eq!(column_title(0, SortKey::Name, sort).to_string(), "1 Name");
    }

    #[test]
    fn price_uses_plain_number_form() {
        assert_eq!(format_price("$", 1200.0), "$1200");
        assert_eq!(format_price("€", 99.5), "€99.5");
    }
}
