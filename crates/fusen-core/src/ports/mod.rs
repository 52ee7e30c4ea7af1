//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! ストアの実装詳細（現状は in-memory、将来は外部ストレージ）を
//! インターフェースの背後に隠蔽します。

pub mod item_store;

pub use self::item_store::ItemStore;
