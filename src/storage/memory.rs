use super::errors::{StoreError, StoreResult};
use super::types::{Item, ItemId, ItemPayload};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// First handle handed out by a fresh store.
pub const FIRST_ITEM_ID: ItemId = 1;

/// Everything guarded by the store lock. The map and the counter always move together.
#[derive(Debug)]
struct StoreState {
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

/// In-memory item store.
///
/// A single mutex serialises every operation, reads included, so `list` always
/// sees one consistent instant and concurrent creates never share a handle.
/// Handles are never reused, even after a delete.
#[derive(Debug)]
pub struct ItemStore {
    state: Mutex<StoreState>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                items: BTreeMap::new(),
                next_id: FIRST_ITEM_ID,
            }),
        }
    }

    // Every mutation is a single infallible map call, so state behind a poisoned
    // lock is still consistent and safe to keep serving.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a new item under the next free handle and returns it.
    pub fn create(&self, payload: ItemPayload) -> Item {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;

        let item = payload.into_item(id);
        state.items.insert(id, item.clone());
        drop(state);

        tracing::debug!("CREATE: Stored item {}", id);
        item
    }

    /// Snapshot of every stored item, ordered by handle.
    pub fn list(&self) -> Vec<Item> {
        let state = self.lock();
        state.items.values().cloned().collect()
    }

    pub fn get(&self, id: ItemId) -> StoreResult<Item> {
        self.lock()
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces the content of an existing item. Never creates one.
    pub fn update(&self, id: ItemId, payload: ItemPayload) -> StoreResult<Item> {
        let mut state = self.lock();
        let slot = state.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = payload.into_item(id);
        let item = slot.clone();
        drop(state);

        tracing::debug!("UPDATE: Replaced item {}", id);
        Ok(item)
    }

    pub fn delete(&self, id: ItemId) -> StoreResult<()> {
        if self.lock().items.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!("DELETE: Removed item {}", id);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The handle the next `create` will assign.
    pub fn next_id(&self) -> ItemId {
        self.lock().next_id
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
