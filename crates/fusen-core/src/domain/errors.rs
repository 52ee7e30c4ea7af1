use thiserror::Error;

/// Domain error for the item store.
///
/// Exactly one kind exists: creation with no usable task text. Everything
/// else (malformed JSON, unknown routes, wrong methods) is rejected by the
/// HTTP collaborator before this crate is reached.
#[derive(Debug, Error)]
pub enum FusenError {
    #[error("{0}")]
    InvalidInput(String),
}

impl FusenError {
    /// Shorthand used by validation.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
