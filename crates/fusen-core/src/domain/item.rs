use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an Item: a store-assigned sequence number starting at 1.
///
/// Serializes as a bare number so the wire shape stays `{"id": 1, ...}`.
/// Display adds an `item-` prefix for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// A to-do record: unique identifier + task text.
///
/// Stored shape and wire shape are the same two fields. The store owns `id`
/// assignment; callers never supply one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub task: String,
}

impl Item {
    pub fn new(id: ItemId, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
        }
    }
}
