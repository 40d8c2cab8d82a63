//! View-state controller for the to-do collection.
//!
//! `Session` owns the local snapshot of the remote collection, the pending
//! new-item text, and the single edit session. Each user intent maps to at
//! most one store call, after which the snapshot is reconciled: create
//! prepends the returned entity directly, while toggle, edit-commit, and
//! delete re-fetch the full collection, since a mutation by id does not
//! return the updated collection shape.

use crate::error::{Result, StoreError};
use crate::item::TodoItem;
use crate::patch::TodoPatch;
use crate::store::TodoStore;

/// The at-most-one item currently being edited, with its draft title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Identifier of the item under edit.
    pub id: String,
    /// Locally-mutated copy of the title.
    pub draft: String,
}

/// What an edit request did: opened a session or committed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// A session was opened (or replaced one for a different item).
    Started,
    /// The open session for this item was committed and cleared.
    Committed,
}

/// The view-state controller.
///
/// All state lives here and is mutated only through `&mut self` methods, so
/// overlapping mutations are impossible by construction. On any store
/// failure the state is left in its last-known-good configuration and the
/// error is propagated to the caller for reporting.
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    items: Vec<TodoItem>,
    input: String,
    edit: Option<EditSession>,
}

impl<S: TodoStore> Session<S> {
    /// Create a controller with an empty snapshot.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            input: String::new(),
            edit: None,
        }
    }

    /// The collection snapshot as of the last successful store response.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// The pending new-item text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the pending new-item text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The open edit session, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Replace the draft title of the open edit session. No-op when no
    /// session is open.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.edit {
            edit.draft = text.into();
        }
    }

    /// Re-fetch the collection and replace the snapshot.
    ///
    /// # Errors
    /// On store failure the snapshot is left untouched and the error is
    /// returned.
    pub async fn refresh(&mut self) -> Result<()> {
        self.items = self.store.list().await?;
        Ok(())
    }

    /// Submit the pending new-item text.
    ///
    /// Whitespace-only input is silently ignored and no store call is made.
    /// On success the returned entity is prepended to the snapshot and the
    /// input is cleared; no re-fetch is needed since the store returns the
    /// canonical new item.
    ///
    /// # Errors
    /// On store failure the input is left intact and the error is returned.
    pub async fn submit(&mut self) -> Result<Option<TodoItem>> {
        let title = self.input.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let item = self.store.create(title).await?;
        self.items.insert(0, item.clone());
        self.input.clear();
        Ok(Some(item))
    }

    /// Flip the completion flag of the item with the given id, then re-fetch.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` without a store call if the id is not
    /// in the snapshot; otherwise propagates store failures, leaving the
    /// snapshot unchanged.
    pub async fn toggle(&mut self, id: &str) -> Result<()> {
        let current = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?
            .completed;

        self.store
            .update(id, &TodoPatch::completed(!current))
            .await?;
        self.refresh().await
    }

    /// Request editing of the item with the given id.
    ///
    /// First request for an id opens a session seeded with the item's
    /// current title and makes no store call. A second request for the
    /// *same* id commits the draft (title only) and clears the session.
    /// A request for a *different* id while a session is open discards the
    /// previous draft without committing it.
    ///
    /// # Errors
    /// Opening fails with `StoreError::NotFound` if the id is not in the
    /// snapshot. Committing fails with `StoreError::Validation` if the
    /// trimmed draft is empty, or propagates store failures; in both cases
    /// the session stays open.
    pub async fn request_edit(&mut self, id: &str) -> Result<EditAction> {
        match &self.edit {
            Some(edit) if edit.id == id => {
                let draft = edit.draft.trim().to_string();
                if draft.is_empty() {
                    return Err(StoreError::Validation(
                        "title must not be empty".to_string(),
                    ));
                }

                self.store.update(id, &TodoPatch::title(draft)).await?;
                self.edit = None;
                self.refresh().await?;
                Ok(EditAction::Committed)
            }
            _ => {
                let title = self
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .ok_or_else(|| StoreError::NotFound(id.to_string()))?
                    .title
                    .clone();

                // Any session open for another item is dropped uncommitted.
                self.edit = Some(EditSession {
                    id: id.to_string(),
                    draft: title,
                });
                Ok(EditAction::Started)
            }
        }
    }

    /// Delete the item with the given id, then re-fetch.
    ///
    /// The id is passed straight to the store, so deleting an already
    /// removed item surfaces the store's `NotFound`.
    ///
    /// # Errors
    /// Propagates store failures, leaving the snapshot unchanged.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        self.store.remove(id).await?;
        self.refresh().await
    }
}
