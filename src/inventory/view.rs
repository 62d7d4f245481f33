//! Derived view: the sorted, filtered projection that the table renders.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

use super::item::InventoryItem;
use super::numeric::extract_leading_number;

/// Category filter value that matches every row.
pub const ALL_CATEGORIES: &str = "All";

/// Column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Category,
    #[default]
    Quantity,
    Price,
}

impl SortKey {
    /// Columns in table order.
    pub fn all() -> &'static [SortKey] {
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

    /// Text form of this column for `item`.
    pub fn field_text<'a>(&self, item: &'a InventoryItem) -> Cow<'a, str> {
        match self {
            Self::Name => Cow::Borrowed(&item.name),
            Self::Category => Cow::Borrowed(&item.category),
            Self::Quantity => Cow::Borrowed(&item.quantity),
            Self::Price => Cow::Owned(item.price.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Header-click semantics: the same key flips direction, a new key
    /// starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                key,
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Inputs to [`derive_view`] borrowed from the store state.
#[derive(Debug, Clone, Copy)]
pub struct ViewQuery<'a> {
    pub sort: SortConfig,
    pub category: &'a str,
    pub search: &'a str,
}

/// Sort the whole collection, then keep rows matching the category filter
/// and the case-insensitive name search.
///
/// Sorting is stable and descending order reverses the comparison rather
/// than the result, so equal values keep collection order either way.
pub fn derive_view<'a>(items: &'a [InventoryItem], query: ViewQuery<'_>) -> Vec<&'a InventoryItem> {
    let mut keyed: Vec<(f64, &InventoryItem)> = items
        .iter()
        .map(|item| {
            (
                extract_leading_number(&query.sort.key.field_text(item)),
                item,
            )
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.partial_cmp(b).unwrap_or(Ordering::Equal);
        match query.sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let needle = query.search.to_lowercase();
    keyed
        .into_iter()
        .map(|(_, item)| item)
        .filter(|item| query.category == ALL_CATEGORIES || item.category == query.category)
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .collect()
}

/// Filter choices: "All" followed by each distinct category in first-seen
/// order.
pub fn category_options(items: &[InventoryItem]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !options[1..].iter().any(|c| c == &item.category) {
            options.push(item.category.clone());
        }
    }
    options
}
