use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form_dialog;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::notice::render_notice;
use crate::ui::table::InventoryTable;
use ratatui::widgets::{Clear, TableState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let inventory = app.inventory();

    frame.render_widget(Header::new(inventory, app.focus()).widget(), header);

    frame.render_widget(Clear, body);
    let rows = inventory.view();
    let mut table_state = TableState::default();
    if !rows.is_empty() {
        table_state.select(Some(inventory.selected));
    }
    let table = InventoryTable::new(rows, inventory.sort, app.display());
    frame.render_stateful_widget(table.widget(), body, &mut table_state);

    frame.render_widget(Footer::new(app.focus(), app.save_error()).widget(footer), footer);

    render_form_dialog(frame, app.form(), body);
    if let Some(notice) = &inventory.notice {
        render_notice(frame, notice, area);
    }
}
