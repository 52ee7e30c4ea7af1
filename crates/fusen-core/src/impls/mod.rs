//! 実装（InMemoryItemStore: 開発・本番兼用）

pub mod inmem_store;

pub use self::inmem_store::InMemoryItemStore;
