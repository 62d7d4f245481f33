use std::time::{SystemTime, UNIX_EPOCH};

use super::item::{InventoryItem, ItemId};

/// Hands out ids for new items.
///
/// Ids stay close to the creation time in milliseconds but are strictly
/// increasing: a new id is always above every id in the collection and above
/// the last one issued, so two adds within the same millisecond never clash.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_issued: Option<ItemId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, existing: &[InventoryItem]) -> ItemId {
        self.next_id_at(now_millis(), existing)
    }

    /// Same as [`next_id`](Self::next_id) with an explicit clock reading.
    pub fn next_id_at(&mut self, now_millis: u64, existing: &[InventoryItem]) -> ItemId {
        let floor = existing
            .iter()
            .map(|item| item.id)
            .chain(self.last_issued)
            .max()
            .map(|ItemId(max)| max.saturating_add(1))
            .unwrap_or(0);
        let id = ItemId(now_millis.max(floor));
        self.last_issued = Some(id);
        id
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
