//! アプリケーションロジック（ItemService, validate_task）

pub mod service;

pub use self::service::{ItemService, TASK_REQUIRED, validate_task};
