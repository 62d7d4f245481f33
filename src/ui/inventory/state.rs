use crate::inventory::{
    category_options, derive_view, InventoryItem, SortConfig, ViewQuery, ALL_CATEGORIES,
};
use crate::ui::mvi::UiState;

/// Which item dialog is open. At most one can be.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Adding,
    Editing {
        /// Snapshot of the item as it was when the dialog opened.
        item: InventoryItem,
    },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Blocking notification. Input is ignored until it is dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    DuplicateName { name: String },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => "Item already exists",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::DuplicateName { name } => {
                format!("An item named \"{name}\" is already in the inventory.")
            }
        }
    }
}

/// Authoritative inventory collection plus the view settings applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    pub items: Vec<InventoryItem>,
    pub category_filter: String,
    pub search_term: String,
    pub sort: SortConfig,
    pub dialog: DialogState,
    pub notice: Option<Notice>,
    /// Cursor row within the derived view.
    pub selected: usize,
    /// Bumped on every change to `items`; the app persists when it moves.
    pub revision: u64,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            category_filter: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            sort: SortConfig::default(),
            dialog: DialogState::Closed,
            notice: None,
            selected: 0,
            revision: 0,
        }
    }
}

impl UiState for InventoryState {}

impl InventoryState {
    pub fn query(&self) -> ViewQuery<'_> {
        ViewQuery {
            sort: self.sort,
            category: &self.category_filter,
            search: &self.search_term,
        }
    }

    /// Rows to display, in display order.
    pub fn view(&self) -> Vec<&InventoryItem> {
        derive_view(&self.items, self.query())
    }

    pub fn categories(&self) -> Vec<String> {
        category_options(&self.items)
    }

    pub fn selected_item(&self) -> Option<&InventoryItem> {
        self.view().get(self.selected).copied()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}
