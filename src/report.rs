//! Plain-text listing of the derived view, used by `--list`.

use std::fmt::Write;

use crate::config::DisplayConfig;
use crate::inventory::{derive_view, is_low_stock, InventoryItem, SortKey, ViewQuery};
use crate::ui::table::format_price;

const LOW_STOCK_MARK: &str = "low stock";

/// Render `items` through `query` as an aligned text table, one row per item.
pub fn render_listing(
    items: &[InventoryItem],
    query: ViewQuery<'_>,
    display: &DisplayConfig,
) -> String {
    let rows: Vec<([String; 4], bool)> = derive_view(items, query)
        .into_iter()
        .map(|item| {
            let cells = [
                item.name.clone(),
                item.category.clone(),
                item.quantity.clone(),
                format_price(&display.currency_symbol, item.price),
            ];
            (cells, is_low_stock(&item.quantity, display.low_stock_threshold))
        })
        .collect();

    let headers: Vec<String> = SortKey::all()
        .iter()
        .map(|key| key.label().to_string())
        .collect();
    let mut widths = [0usize; 4];
    for (width, header) in widths.iter_mut().zip(&headers) {
        *width = header.chars().count();
    }
    for (cells, _) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &widths, &headers, None);
    for (cells, low) in &rows {
        push_row(&mut out, &widths, cells, low.then_some(LOW_STOCK_MARK));
    }
    out
}

fn push_row(out: &mut String, widths: &[usize; 4], cells: &[String], mark: Option<&str>) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let pad = width.saturating_sub(cell.chars().count());
        let _ = write!(line, "{cell}{}", " ".repeat(pad));
    }
    if let Some(mark) = mark {
        let _ = write!(line, "  {mark}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
