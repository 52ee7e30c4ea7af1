//! Domain model (items, identifiers, errors).

pub mod errors;
pub mod item;

pub use self::errors::FusenError;
pub use self::item::{Item, ItemId};
