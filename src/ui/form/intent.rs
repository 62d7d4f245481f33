use crate::inventory::InventoryItem;
use crate::ui::form::state::FormError;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Open with empty fields for a new item.
    OpenBlank,
    /// Open pre-filled from an existing item.
    OpenWith { item: InventoryItem },
    /// Typed character for the focused field.
    Input { ch: char },
    Backspace,
    NextField,
    PrevField,
    /// Submission failed validation.
    Reject { error: FormError },
    Close,
}

impl Intent for FormIntent {}
