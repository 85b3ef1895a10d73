//! Todo model
//!
//! A todo is a line of text with a done flag. Ids are assigned by the store
//! and never reused.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo
pub type TodoId = u64;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned at creation
    pub id: TodoId,

    /// Trimmed item text
    pub text: String,

    /// Whether the item is completed
    pub done: bool,

    /// When this todo was created (ISO-8601, UTC)
    pub created_at: String,

    /// When this todo was last mutated (absent until the first mutation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Todo {
    /// Create a pending todo stamped with the current time.
    ///
    /// The caller is responsible for validating and trimming `text`.
    #[must_use]
    pub fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
            created_at: timestamp_now(),
            updated_at: None,
        }
    }

    /// Apply a partial update and stamp `updated_at`.
    ///
    /// `updated_at` is refreshed even when the patch is empty.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(text) = &patch.text {
            self.text = text.trim().to_string();
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
        self.touch();
    }

    /// Flip the done flag and stamp `updated_at`
    pub fn toggle(&mut self) {
        self.done = !self.done;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(timestamp_now());
    }
}

/// Fields an update may change. `None` leaves the field as is.
///
/// Unlike creation, an update may set `text` to an empty or blank string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    /// Replacement text (trimmed when applied)
    pub text: Option<String>,
    /// Replacement done flag
    pub done: Option<bool>,
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2026-01-01T12:00:00.000Z`
#[must_use]
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
