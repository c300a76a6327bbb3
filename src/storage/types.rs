use serde::{Deserialize, Serialize};

/// Integer handle identifying an item for the lifetime of the store.
pub type ItemId = i64;

/// A stored item.
///
/// `id` is always assigned by the store; whatever a client sends for it is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub value: String,
}

/// The client-supplied content of an item, used by both create and update.
///
/// Request bodies become payloads through [`codec::decode_payload`](super::codec::decode_payload).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPayload {
    pub name: String,
    pub value: String,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Binds this payload to a handle, producing the record that gets stored.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            value: self.value,
        }
    }
}
