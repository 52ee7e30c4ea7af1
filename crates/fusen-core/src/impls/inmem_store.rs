//! In-memory item store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{FusenError, Item, ItemId};
use crate::observability::StoreCounts;
use crate::ports::ItemStore;

/// Task text of the item every store starts with.
pub const SEED_TASK: &str = "Initial to-do";

/// In-memory store state.
struct InMemoryStoreState {
    /// All items, insertion order preserved (single source of truth).
    items: Vec<Item>,

    /// Next item ID to assign.
    next_item_id: u64,
}

impl InMemoryStoreState {
    fn seeded() -> Self {
        let mut state = Self {
            items: Vec::new(),
            next_item_id: 1,
        };
        let seed_id = state.allocate_item_id();
        state.items.push(Item::new(seed_id, SEED_TASK));
        state
    }

    /// Allocate a new ItemId.
    ///
    /// Monotonic counter, never derived from the list length, so ids stay
    /// unique even when appends interleave.
    fn allocate_item_id(&mut self) -> ItemId {
        let id = ItemId::new(self.next_item_id);
        self.next_item_id += 1;
        id
    }

    fn counts(&self) -> StoreCounts {
        StoreCounts {
            items: self.items.len(),
        }
    }
}

/// In-memory item store.
///
/// One `tokio::sync::Mutex` guards both the sequence and the id counter;
/// `append` runs allocate+push inside a single lock acquisition, so ids
/// never repeat under concurrent creation.
pub struct InMemoryItemStore {
    state: Arc<Mutex<InMemoryStoreState>>,
}

impl InMemoryItemStore {
    /// Create a store already holding the seed item `{id: 1, task: "Initial to-do"}`.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryStoreState::seeded())),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn append(&self, task: String) -> Result<Item, FusenError> {
        let mut state = self.state.lock().await;
        let id = state.allocate_item_id();
        let item = Item::new(id, task);
        state.items.push(item.clone());
        Ok(item)
    }

    async fn list(&self) -> Result<Vec<Item>, FusenError> {
        let state = self.state.lock().await;
        Ok(state.items.clone())
    }

    async fn counts(&self) -> Result<StoreCounts, FusenError> {
        let state = self.state.lock().await;
        Ok(state.counts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_store_holds_only_the_seed() {
        let store = InMemoryItemStore::new();

        let items = store.list().await.unwrap();
        assert_eq!(items, vec![Item::new(ItemId::new(1), SEED_TASK)]);

        let counts = store.counts().await.unwrap();
        assert_eq!(counts.items, 1);
    }

    #[tokio::test]
    async fn append_grows_the_list_in_insertion_order() {
        let store = InMemoryItemStore::new();

        store.append("first".to_string()).await.unwrap();
        store.append("second".to_string()).await.unwrap();

        let items = store.list().await.unwrap();
        let tasks: Vec<&str> = items.iter().map(|i| i.task.as_str()).collect();
        assert_eq!(tasks, vec![SEED_TASK, "first", "second"]);
    }

    #[tokio::test]
    async fn ids_are_sequential_after_the_seed() {
        let store = InMemoryItemStore::new();

        let a = store.append("a".to_string()).await.unwrap();
        let b = store.append("b".to_string()).await.unwrap();

        assert_eq!(a.id, ItemId::new(2));
        assert_eq!(b.id, ItemId::new(3));
    }

    #[tokio::test]
    async fn concurrent_appends_get_distinct_ids() {
        let store = Arc::new(InMemoryItemStore::new());

        let mut handles = Vec::new();
        for n in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.append(format!("task {n}")).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 16);
        assert_eq!(store.counts().await.unwrap().items, 17);
    }
}
