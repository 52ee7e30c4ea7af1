use std::sync::Arc;

use crate::domain::{FusenError, Item};
use crate::observability::StoreCounts;
use crate::ports::ItemStore;

/// Message surfaced when a creation request carries no usable task text.
pub const TASK_REQUIRED: &str = "Task is required";

/// Validate the `task` field of a creation request.
///
/// The field must be present and, after trimming, non-empty. Absent field,
/// empty string, and whitespace-only all fail identically. On success the
/// caller's bytes are returned untouched; trimming governs validity only,
/// not what gets stored.
pub fn validate_task(task: Option<String>) -> Result<String, FusenError> {
    match task {
        Some(task) if !task.trim().is_empty() => Ok(task),
        _ => Err(FusenError::invalid_input(TASK_REQUIRED)),
    }
}

/// `ItemService` answers the two requests of the store service:
/// list all items, and validate-and-append a new one.
///
/// The store is injected through the port so the service can be tested
/// against any implementation.
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Full ordered item sequence. No side effects.
    pub async fn list_items(&self) -> Result<Vec<Item>, FusenError> {
        self.store.list().await
    }

    /// Validate `task` and append one item.
    ///
    /// Nothing is mutated when validation fails; id assignment happens
    /// inside the store's critical section.
    pub async fn create_item(&self, task: Option<String>) -> Result<Item, FusenError> {
        let task = validate_task(task)?;
        self.store.append(task).await
    }

    /// Store counts for the health report.
    pub async fn counts(&self) -> Result<StoreCounts, FusenError> {
        self.store.counts().await
    }
}
