//! Error types shared by store backends and the session controller.

use thiserror::Error;

/// Result type alias for store and session operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur when talking to the item store.
///
/// Local pre-flight checks reuse the same taxonomy: an edit commit with an
/// empty title is a `Validation` error, and acting on an identifier missing
/// from the snapshot is a `NotFound` error, even though neither reaches the
/// network.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure, timeout, or an unexpected non-2xx response.
    #[error("transport error: {0}")]
    Transport(String),

    /// Payload rejected, either by the server or by local validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// No item exists with the given identifier.
    #[error("item not found: {0}")]
    NotFound(String),
}
