//! Partial-update payloads for to-do items.

use serde::{Deserialize, Serialize};

/// A field-level update for an existing item.
///
/// Only the fields that are set are serialized, so the store applies exactly
/// the supplied subset and leaves everything else untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPatch {
    /// New title, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New completion flag, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// A patch that only changes the title.
    #[must_use]
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// A patch that only changes the completion flag.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }

    /// True if the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_patch_omits_completed() {
        let patch = TodoPatch::title("new text");
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "new text" }));
    }

    #[test]
    fn test_completed_patch_omits_title() {
        let patch = TodoPatch::completed(true);
        let json = serde_json::to_value(&patch).unwrap();

        assert_eq!(json, serde_json::json!({ "completed": true }));
    }

    #[test]
    fn test_empty_patch() {
        assert!(TodoPatch::default().is_empty());
        assert!(!TodoPatch::completed(false).is_empty());
    }
}
