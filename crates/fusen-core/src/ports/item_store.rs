//! ItemStore port - アイテム列の正本（source of truth）
//!
//! ItemStore は以下を管理します：
//! - 順序付きアイテム列（挿入順を保持）
//! - id カウンタ（採番の権威はストアにある）
//!
//! # 設計原則
//! - 採番と append は同一クリティカルセクション内で行う
//! - 呼び出し側は task 本文だけを渡し、id を supply しない

use async_trait::async_trait;

use crate::domain::{FusenError, Item};
use crate::observability::StoreCounts;

/// Store of the ordered item sequence.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Allocate the next id and append an item holding `task`, atomically.
    ///
    /// Returns the created item. The caller is expected to have validated
    /// `task` already; the store does not inspect it.
    async fn append(&self, task: String) -> Result<Item, FusenError>;

    /// Full ordered snapshot of the current items.
    async fn list(&self) -> Result<Vec<Item>, FusenError>;

    /// Counts for observability.
    async fn counts(&self) -> Result<StoreCounts, FusenError>;
}
