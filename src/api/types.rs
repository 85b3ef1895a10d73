//! API request types
//!
//! Request fields are lenient: a field of the wrong JSON type is treated as
//! absent rather than rejecting the whole body. Responses are plain
//! [`Todo`](crate::core::models::Todo) values.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::core::models::TodoPatch;

/// Request body for creating a todo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoRequest {
    /// Todo text; `None` when missing or not a string
    #[serde(default, deserialize_with = "string_or_absent")]
    pub text: Option<String>,
}

/// Request body for updating a todo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoRequest {
    /// Replacement text; `None` when missing or not a string
    #[serde(default, deserialize_with = "string_or_absent")]
    pub text: Option<String>,
    /// Replacement done flag; `None` when missing or not a boolean
    #[serde(default, deserialize_with = "bool_or_absent")]
    pub done: Option<bool>,
}

impl UpdateTodoRequest {
    /// Convert into the domain patch
    #[must_use]
    pub fn to_patch(&self) -> TodoPatch {
        TodoPatch {
            text: self.text.clone(),
            done: self.done,
        }
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn bool_or_absent<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}
