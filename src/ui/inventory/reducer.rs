use crate::inventory::SortConfig;
use crate::ui::inventory::intent::InventoryIntent;
use crate::ui::inventory::state::{DialogState, InventoryState, Notice};
use crate::ui::mvi::Reducer;

pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventoryState;
    type Intent = InventoryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            InventoryIntent::Loaded { items } => {
                state.items = items;
                state.selected = 0;
                state.revision += 1;
            }
            InventoryIntent::Add { draft, id } => {
                if state.contains_name(&draft.name) {
                    // Dialog stays open so the user can rename and retry.
                    tracing::info!("Rejected duplicate item name {:?}", draft.name);
                    state.notice = Some(Notice::DuplicateName { name: draft.name });
                } else {
                    state.items.push(draft.into_item(id));
                    state.dialog = DialogState::Closed;
                    state.revision += 1;
                }
            }
            InventoryIntent::Update { item } => {
                if let Some(slot) = state.items.iter_mut().find(|i| i.id == item.id) {
                    *slot = item;
                    state.revision += 1;
                }
                state.dialog = DialogState::Closed;
            }
            InventoryIntent::Delete { id } => {
                let before = state.items.len();
                state.items.retain(|item| item.id != id);
                if state.items.len() != before {
                    state.revision += 1;
                }
            }
            InventoryIntent::SetCategoryFilter { category } => {
                state.category_filter = category;
                state.selected = 0;
            }
            InventoryIntent::CycleCategoryFilter { forward } => {
                let options = state.categories();
                let next = match options.iter().position(|c| c == &state.category_filter) {
                    Some(index) if forward => (index + 1) % options.len(),
                    Some(index) => (index + options.len() - 1) % options.len(),
                    None => 0,
                };
                state.category_filter = options[next].clone();
                state.selected = 0;
            }
            InventoryIntent::SetSearchTerm { term } => {
                state.search_term = term;
                state.selected = 0;
            }
            InventoryIntent::ToggleSort { key } => {
                state.sort = SortConfig::toggled(state.sort, key);
            }
            InventoryIntent::OpenAdd => {
                state.dialog = DialogState::Adding;
            }
            InventoryIntent::OpenEdit { id } => {
                if let Some(item) = state.items.iter().find(|i| i.id == id) {
                    state.dialog = DialogState::Editing { item: item.clone() };
                }
            }
            InventoryIntent::CloseDialog => {
                state.dialog = DialogState::Closed;
            }
            InventoryIntent::DismissNotice => {
                state.notice = None;
            }
            InventoryIntent::MoveSelection { delta } => {
                let len = state.view().len();
                if len > 0 {
                    let current = state.selected.min(len - 1) as i64;
                    state.selected = (current + i64::from(delta)).clamp(0, len as i64 - 1) as usize;
                }
            }
        }
        clamp_selection(state)
    }
}

fn clamp_selection(mut state: InventoryState) -> InventoryState {
    let len = state.view().len();
    state.selected = state.selected.min(len.saturating_sub(1));
    state
}
