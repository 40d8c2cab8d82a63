//! tasko-core: Domain models and view-state logic for to-do list management.
//!
//! This crate provides:
//! - `TodoItem`: The core to-do item model as returned by the remote store
//! - `TodoPatch`: Partial-update payloads for field-level mutations
//! - `TodoStore`: The contract a remote item store backend implements
//! - `Session`: The view-state controller mapping user intents to store calls

pub mod error;
pub mod item;
pub mod patch;
pub mod session;
pub mod store;

pub use error::{Result, StoreError};
pub use item::TodoItem;
pub use patch::TodoPatch;
pub use session::{EditAction, EditSession, Session};
pub use store::TodoStore;
