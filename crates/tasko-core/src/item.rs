//! To-do item model.

use serde::{Deserialize, Serialize};

/// A single to-do entry as stored by the remote collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    /// Opaque identifier assigned by the store, immutable once assigned.
    /// The wire format names this field `_id`.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display text. Non-empty after trimming.
    pub title: String,

    /// Completion flag. New items start unchecked.
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Create an item with the given identifier and title, unchecked.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
        }
    }

    /// Set the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_item_defaults() {
        let item = TodoItem::new("abc123", "buy milk");

        assert_eq!(item.id, "abc123");
        assert_eq!(item.title, "buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn test_wire_field_names() {
        let item = TodoItem::new("abc123", "buy milk").with_completed(true);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "_id": "abc123", "title": "buy milk", "completed": true })
        );
    }

    #[test]
    fn test_deserialize_missing_completed() {
        // Some stores omit `completed` for fresh items.
        let item: TodoItem =
            serde_json::from_str(r#"{ "_id": "x1", "title": "water plants" }"#).unwrap();

        assert_eq!(item.id, "x1");
        assert!(!item.completed);
    }
}
