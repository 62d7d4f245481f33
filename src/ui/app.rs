use crate::config::DisplayConfig;
use crate::inventory::{seed_items, IdGenerator, InventoryItem, SortConfig, SortKey};
use crate::storage::InventoryStorage;
use crate::ui::form::{FormIntent, FormMode, FormReducer, FormState};
use crate::ui::inventory::{InventoryIntent, InventoryReducer, InventoryState};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the inventory state and writes the collection through to storage
/// after every change.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Collection and view state (MVI pattern).
    inventory: InventoryState,
    /// Item editor form (MVI pattern).
    form: FormState,
    storage: Box<dyn InventoryStorage>,
    ids: IdGenerator,
    display: DisplayConfig,
    /// Revision last written to storage.
    saved_revision: u64,
    /// Last persistence failure, shown in the footer until the next good save.
    save_error: Option<String>,
}

impl App {
    /// Build the app and load the collection from `storage`.
    pub fn new(
        storage: Box<dyn InventoryStorage>,
        display: DisplayConfig,
        sort: SortConfig,
    ) -> Self {
        let items = load_items(storage.as_ref());
        let mut app = Self {
            should_quit: false,
            focus: Focus::Table,
            inventory: InventoryState {
                sort,
                ..InventoryState::default()
            },
            form: FormState::default(),
            storage,
            ids: IdGenerator::new(),
            display,
            saved_revision: 0,
            save_error: None,
        };
        app.dispatch_inventory(InventoryIntent::Loaded { items });
        // Loading is not a mutation; don't write back what was just read.
        app.saved_revision = app.inventory.revision;
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub fn save_error(&self) -> Option<&str> {
        self.save_error.as_deref()
    }

    pub fn has_notice(&self) -> bool {
        self.inventory.notice.is_some()
    }

    // ========================================================================
    // Store & view
    // ========================================================================

    /// Dispatch an intent to the inventory reducer and persist if the
    /// collection changed.
    pub fn dispatch_inventory(&mut self, intent: InventoryIntent) {
        dispatch_mvi!(self, inventory, InventoryReducer, intent);
        if self.inventory.revision != self.saved_revision {
            self.persist();
        }
    }

    fn persist(&mut self) {
        match self.storage.save(&self.inventory.items) {
            Ok(()) => {
                self.saved_revision = self.inventory.revision;
                self.save_error = None;
            }
            Err(err) => {
                tracing::error!("Failed to save inventory: {}", err);
                self.save_error = Some(err.to_string());
            }
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.inventory.selected_item().map(|item| item.id) {
            self.dispatch_inventory(InventoryIntent::Delete { id });
        }
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.dispatch_inventory(InventoryIntent::ToggleSort { key });
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.dispatch_inventory(InventoryIntent::CycleCategoryFilter { forward });
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.dispatch_inventory(InventoryIntent::SetCategoryFilter {
            category: category.into(),
        });
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch_inventory(InventoryIntent::SetSearchTerm { term: term.into() });
    }

    pub fn move_selection(&mut self, delta: i32) {
        self.dispatch_inventory(InventoryIntent::MoveSelection { delta });
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch_inventory(InventoryIntent::DismissNotice);
    }

    // ========================================================================
    // Search box
    // ========================================================================

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    pub fn focus_table(&mut self) {
        self.focus = Focus::Table;
    }

    pub fn push_search_char(&mut self, ch: char) {
        let mut term = self.inventory.search_term.clone();
        term.push(ch);
        self.set_search_term(term);
    }

    pub fn pop_search_char(&mut self) {
        let mut term = self.inventory.search_term.clone();
        if term.pop().is_some() {
            self.set_search_term(term);
        }
    }

    // ========================================================================
    // Item form
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn open_add(&mut self) {
        self.dispatch_inventory(InventoryIntent::OpenAdd);
        self.dispatch_form(FormIntent::OpenBlank);
    }

    pub fn open_edit_selected(&mut self) {
        let Some(item) = self.inventory.selected_item().cloned() else {
            return;
        };
        self.dispatch_inventory(InventoryIntent::OpenEdit { id: item.id });
        self.dispatch_form(FormIntent::OpenWith { item });
    }

    /// Validate the form and hand the draft to the store. The form closes
    /// only when the store closed its dialog.
    pub fn submit_form(&mut self) {
        let (Some(mode), Some(fields)) = (self.form.mode(), self.form.fields()) else {
            return;
        };
        let draft = match fields.to_draft() {
            Ok(draft) => draft,
            Err(error) => {
                self.dispatch_form(FormIntent::Reject { error });
                return;
            }
        };

        match mode {
            FormMode::Add => {
                let id = self.ids.next_id(&self.inventory.items);
                self.dispatch_inventory(InventoryIntent::Add { draft, id });
            }
            FormMode::Edit => match draft.into_edited() {
                Some(item) => self.dispatch_inventory(InventoryIntent::Update { item }),
                None => self.dispatch_inventory(InventoryIntent::CloseDialog),
            },
        }

        if !self.inventory.dialog.is_open() {
            self.dispatch_form(FormIntent::Close);
        }
    }

    pub fn cancel_form(&mut self) {
        self.dispatch_inventory(InventoryIntent::CloseDialog);
        self.dispatch_form(FormIntent::Close);
    }
}

/// Read the persisted collection, falling back to the seed when nothing is
/// stored or the stored value cannot be read.
pub fn load_items(storage: &dyn InventoryStorage) -> Vec<InventoryItem> {
    match storage.load() {
        Ok(Some(items)) => {
            tracing::info!("Loaded {} items from storage", items.len());
            items
        }
        Ok(None) => {
            tracing::info!("No saved inventory, starting from seed collection");
            seed_items()
        }
        Err(err) => {
            tracing::warn!("Ignoring unreadable inventory ({}), using seed collection", err);
            seed_items()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn make_app(storage: &MemoryStorage) -> App {
        App::new(
            Box::new(storage.clone()),
            DisplayConfig::default(),
            SortConfig::default(),
        )
    }

    #[test]
    fn loading_does_not_write_back() {
        let storage = MemoryStorage::new();
        let _app = make_app(&storage);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn view_changes_do_not_persist() {
        let storage = MemoryStorage::new();
        let mut app = make_app(&storage);
        app.toggle_sort(SortKey::Price);
        app.set_search_term("desk");
        app.cycle_category(true);
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn failed_save_keeps_mutation_and_reports() {
        let storage = MemoryStorage::new();
        let mut app = make_app(&storage);
        storage.fail_saves(true);
        app.delete_selected();
        assert_eq!(app.inventory().items.len(), 3);
        assert!(app.save_error().is_some());

        // The unsaved revision is retried on the next dispatch.
        storage.fail_saves(false);
        app.move_selection(1);
        assert!(app.save_error().is_none());
        assert_eq!(storage.snapshot().map(|s| s.len()), Some(3));
    }

    #[test]
    fn search_editing_round_trip() {
        let storage = MemoryStorage::new();
        let mut app = make_app(&storage);
        app.focus_search();
        for ch in "key".chars() {
            app.push_search_char(ch);
        }
        assert_eq!(app.inventory().view().len(), 1);
        app.pop_search_char();
        assert_eq!(app.inventory().search_term, "ke");
        app.focus_table();
        assert_eq!(app.focus(), Focus::Table);
    }
}
