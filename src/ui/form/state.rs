//! State for the item editor form.

use thiserror::Error;

use crate::inventory::{Draft, InventoryItem, ItemId};
use crate::ui::mvi::UiState;

/// Input fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Category,
    Quantity,
    Price,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[Self::Name, Self::Category, Self::Quantity, Self::Price]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Category => Self::Quantity,
            Self::Quantity => Self::Price,
            Self::Price => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Category => Self::Name,
            Self::Quantity => Self::Category,
            Self::Price => Self::Quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add => " Add New Item ",
            Self::Edit => " Edit Item ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{} is required", .0.label())]
    MissingField(FormField),
}

/// Text buffers behind the form, plus the coerced price.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    /// Carried over from the initial values, untouched by editing.
    pub id: Option<ItemId>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price_text: String,
    /// `price_text` as a number, refreshed on every price keystroke.
    pub price: f64,
}

impl FormFields {
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.clone(),
            price_text: item.price.to_string(),
            price: item.price,
        }
    }

    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Quantity => &self.quantity,
            FormField::Price => &self.price_text,
        }
    }

    pub(crate) fn text_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Category => &mut self.category,
            FormField::Quantity => &mut self.quantity,
            FormField::Price => &mut self.price_text,
        }
    }

    /// Presence check on every field, then hand back the draft.
    pub fn to_draft(&self) -> Result<Draft, FormError> {
        if let Some(field) = FormField::all()
            .iter()
            .copied()
            .find(|field| self.text(*field).is_empty())
        {
            return Err(FormError::MissingField(field));
        }
        Ok(Draft {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: self.quantity.clone(),
            price: self.price,
        })
    }
}

/// Numeric value of the price buffer. Empty, a lone point, or a value too
/// large for `f64` reads as 0.
pub fn coerce_price(text: &str) -> f64 {
    text.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Hidden,
    Open {
        mode: FormMode,
        fields: FormFields,
        focused: FormField,
        error: Option<FormError>,
    },
}

impl UiState for FormState {}

impl FormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn mode(&self) -> Option<FormMode> {
        match self {
            Self::Open { mode, .. } => Some(*mode),
            Self::Hidden => None,
        }
    }

    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            Self::Open { fields, .. } => Some(fields),
            Self::Hidden => None,
        }
    }

    pub fn error(&self) -> Option<&FormError> {
        match self {
            Self::Open { error, .. } => error.as_ref(),
            Self::Hidden => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            id: None,
            name: "Mouse".into(),
            category: "Electronics".into(),
            quantity: "20".into(),
            price_text: "25.5".into(),
            price: 25.5,
        }
    }

    #[test]
    fn hidden_is_default() {
        assert_eq!(FormState::default(), FormState::Hidden);
        assert!(!FormState::Hidden.is_visible());
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(FormField::Price.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Price);
    }

    #[test]
    fn complete_fields_produce_draft() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.name, "Mouse");
        assert_eq!(draft.quantity, "20");
        assert_eq!(draft.price, 25.5);
        assert_eq!(draft.id, None);
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut fields = filled();
        fields.category.clear();
        fields.price_text.clear();
        assert_eq!(
            fields.to_draft(),
            Err(FormError::MissingField(FormField::Category))
        );
        assert_eq!(
            FormError::MissingField(FormField::Category).to_string(),
            "Category is required"
        );
    }

    #[test]
    fn price_coercion() {
        assert_eq!(coerce_price("12.5"), 12.5);
        assert_eq!(coerce_price("12."), 12.0);
        assert_eq!(coerce_price(""), 0.0);
        assert_eq!(coerce_price("."), 0.0);
    }

    #[test]
    fn overflowing_price_coerces_to_zero() {
        assert_eq!(coerce_price(&"9".repeat(400)), 0.0);
        assert!(coerce_price(&"9".repeat(300)).is_finite());
    }

    #[test]
    fn edit_fields_carry_id() {
        let item = crate::inventory::seed_items().remove(0);
        let fields = FormFields::from_item(&item);
        assert_eq!(fields.to_draft().unwrap().id, Some(item.id));
        assert_eq!(fields.price_text, "1200");
    }
}
