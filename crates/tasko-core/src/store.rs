//! The contract a remote item store backend implements.

use crate::error::Result;
use crate::item::TodoItem;
use crate::patch::TodoPatch;
use async_trait::async_trait;

/// A stateless request/response interface to a remote to-do collection.
///
/// Implementations own no client-side state; every call is a single
/// round trip, and the returned data reflects server truth at the time of
/// the response.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fetch the full collection, in whatever order the store returns it.
    ///
    /// # Errors
    /// Returns `StoreError::Transport` on network or server failure.
    async fn list(&self) -> Result<Vec<TodoItem>>;

    /// Create a new unchecked item and return it with its assigned id.
    ///
    /// # Errors
    /// Returns `StoreError::Validation` if the store rejects the payload,
    /// or `StoreError::Transport` on network or server failure.
    async fn create(&self, title: &str) -> Result<TodoItem>;

    /// Apply a partial update to exactly the fields set in `patch`.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the id no longer exists, or
    /// `StoreError::Transport` on network or server failure.
    async fn update(&self, id: &str, patch: &TodoPatch) -> Result<()>;

    /// Delete the item with the given id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the id no longer exists, or
    /// `StoreError::Transport` on network or server failure.
    async fn remove(&self, id: &str) -> Result<()>;
}
