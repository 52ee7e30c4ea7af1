//! fusen-core
//!
//! Core building blocks for the Fusen to-do service.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（item, errors）
//! - **ports**: 抽象化レイヤー（ItemStore）
//! - **app**: アプリケーションロジック（ItemService, validate_task）
//! - **impls**: 実装（InMemoryItemStore 開発・本番兼用）
//! - **observability**: ストアのカウントビュー
//!
//! HTTP やシリアライズ境界の知識はこのクレートに持ち込まない。
//! ハンドラ層（fusen-api）は ports 経由でのみストアに触れる。

pub mod domain;
pub mod ports;
pub mod app;
pub mod impls;
pub mod observability;
