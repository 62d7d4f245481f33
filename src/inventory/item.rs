use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of an inventory record.
///
/// Serialized as a bare integer so collections written by older builds
/// (millisecond timestamps) load unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Free text; numeric content is extracted on demand.
    #[serde(with = "lenient::text")]
    pub quantity: String,
    #[serde(with = "lenient::number")]
    pub price: f64,
}

/// Field set produced by the item form.
///
/// `id` is only present when the form was opened on an existing item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub id: Option<ItemId>,
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: f64,
}

impl Draft {
    /// Turn the draft into a new record under `id`, ignoring any carried id.
    pub fn into_item(self, id: ItemId) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
        }
    }

    /// Turn an edit draft back into a record. `None` if the draft never had an id.
    pub fn into_edited(self) -> Option<InventoryItem> {
        let id = self.id?;
        Some(self.into_item(id))
    }
}

impl From<&InventoryItem> for Draft {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity.clone(),
            price: item.price,
        }
    }
}

/// Collection used when nothing has been persisted yet.
pub fn seed_items() -> Vec<InventoryItem> {
    [
        (1, "Laptop", "Electronics", "15", 1200.0),
        (2, "Keyboard", "Electronics", "8", 100.0),
        (3, "Desk Chair", "Furniture", "5", 250.0),
        (4, "Monitor", "Electronics", "12", 300.0),
    ]
    .into_iter()
    .map(|(id, name, category, quantity, price)| InventoryItem {
        id: ItemId(id),
        name: name.to_string(),
        category: category.to_string(),
        quantity: quantity.to_string(),
        price,
    })
    .collect()
}

/// Deserializers that accept both JSON strings and numbers.
///
/// Stored collections may hold `"quantity": 15` or `"quantity": "15"` and
/// `"price": 1200` or `"price": "1200"` depending on which path wrote them.
mod lenient {
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
        /// Non-finite numbers are written as `null`.
        Null,
    }

    pub mod text {
        use super::TextOrNumber;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(value)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
        where
            D: Deserializer<'de>,
        {
            match TextOrNumber::deserialize(deserializer)? {
                TextOrNumber::Text(text) => Ok(text),
                TextOrNumber::Number(number) => Ok(number.to_string()),
                TextOrNumber::Null => Ok(String::new()),
            }
        }
    }

    pub mod number {
        use super::TextOrNumber;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_f64(*value)
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
        where
            D: Deserializer<'de>,
        {
            match TextOrNumber::deserialize(deserializer)? {
                TextOrNumber::Number(number) => number
                    .as_f64()
                    .ok_or_else(|| serde::de::Error::custom("price out of range")),
                TextOrNumber::Text(text) => text
                    .trim()
                    .parse::<f64>()
                    .map(|price| if price.is_finite() { price } else { 0.0 })
                    .map_err(|_| {
                        serde::de::Error::custom(format!("price is not a number: {text:?}"))
                    }),
                TextOrNumber::Null => Ok(0.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_four_items_with_distinct_names() {
        let seed = seed_items();
        assert_eq!(seed.len(), 4);
        let mut names: Vec<_> = seed.iter().map(|i| i.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn quantity_accepts_number_or_string() {
        let json = r#"[
            {"id": 1, "name": "A", "category": "X", "quantity": 15, "price": 1200},
            {"id": 2, "name": "B", "category": "X", "quantity": "8 boxes", "price": "99.5"}
        ]"#;
        let items: Vec<InventoryItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].quantity, "15");
        assert_eq!(items[0].price, 1200.0);
        assert_eq!(items[1].quantity, "8 boxes");
        assert_eq!(items[1].price, 99.5);
    }

    #[test]
    fn null_fields_load_as_empty_values() {
        let json = r#"{"id": 7, "name": "A", "category": "X", "quantity": null, "price": null}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, "");
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn non_finite_price_text_loads_as_zero() {
        let json = r#"{"id": 7, "name": "A", "category": "X", "quantity": "1", "price": "1e400"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, 0.0);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let json = r#"{"id": 1, "name": "A", "category": "X", "quantity": "1", "price": "cheap"}"#;
        assert!(serde_json::from_str::<InventoryItem>(json).is_err());
    }

    #[test]
    fn serializes_quantity_as_text_and_price_as_number() {
        let item = &seed_items()[0];
        let value = serde_json::to_value(item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["quantity"], "15");
        assert_eq!(value["price"], 1200.0);
    }

    #[test]
    fn draft_round_trips_through_edit() {
        let item = seed_items().remove(1);
        let mut draft = Draft::from(&item);
        draft.price = 120.0;
        let edited = draft.into_edited().unwrap();
        assert_eq!(edited.id, item.id);
        assert_eq!(edited.name, item.name);
        assert_eq!(edited.price, 120.0);
    }

    #[test]
    fn blank_draft_has_no_edit_target() {
        assert!(Draft::default().into_edited().is_none());
    }
}
