use crate::inventory::SortKey;
use crate::ui::app::{App, Focus};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route a key press to whichever layer currently owns input: the notice,
/// then the form, then the search box, then the table.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.has_notice() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notice();
        }
        return;
    }

    if app.form().is_visible() {
        handle_form_key(app, key);
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(FormIntent::NextField),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(FormIntent::PrevField),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_form(FormIntent::Input { ch })
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.focus_table(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.push_search_char(ch),
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    if has_command_modifier(key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(digit @ '1'..='4') => {
            if let Some(key) = sort_key_for_digit(digit) {
                app.toggle_sort(key);
            }
        }
        KeyCode::Char('c') => app.cycle_category(true),
        KeyCode::Char('C') => app.cycle_category(false),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

fn sort_key_for_digit(digit: char) -> Option<SortKey> {
    let index = digit.to_digit(10)? as usize;
    SortKey::all().get(index.checked_sub(1)?).copied()
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::inventory::SortConfig;
    use crate::storage::MemoryStorage;

    fn make_app() -> App {
        App::new(
            Box::new(MemoryStorage::new()),
            DisplayConfig::default(),
            SortConfig::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn digits_map_to_columns() {
        assert_eq!(sort_key_for_digit('1'), Some(SortKey::Name));
        assert_eq!(sort_key_for_digit('4'), Some(SortKey::Price));
        assert_eq!(sort_key_for_digit('0'), None);
    }

    #[test]
    fn ctrl_c_quits_even_inside_form() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('a'));
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn typing_q_in_search_does_not_quit() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "q");
        assert!(!app.should_quit());
        assert_eq!(app.inventory().search_term, "q");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus(), Focus::Table);
    }

    #[test]
    fn add_via_keys() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Mouse");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Electronics");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "20");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "25");
        press(&mut app, KeyCode::Enter);

        assert!(!app.form().is_visible());
        assert_eq!(app.inventory().items.len(), 5);
        assert!(app.inventory().contains_name("Mouse"));
    }

    #[test]
    fn notice_swallows_input_until_dismissed() {
        let mut app = make_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Laptop");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Electronics");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert!(app.has_notice());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(
            app.form().fields().map(|f| f.price_text.as_str()),
            Some("1")
        );

        press(&mut app, KeyCode::Enter);
        assert!(!app.has_notice());
        assert!(app.form().is_visible());
        assert_eq!(app.inventory().items.len(), 4);
    }
}
