//! Pure API handlers
//!
//! These handlers are HTTP-agnostic. They validate typed input, call the
//! repository and return `Result<T, ApiError>`. Path ids arrive as raw
//! strings; an id that does not parse simply matches no todo.

use crate::core::models::{Todo, TodoId};
use crate::core::ports::TodoRepository;

use super::error::ApiError;
use super::types::{CreateTodoRequest, UpdateTodoRequest};

/// Parse a path segment into a todo id
#[must_use]
pub fn parse_id(raw: &str) -> Option<TodoId> {
    raw.trim().parse().ok()
}

fn require_id(raw: &str) -> Result<TodoId, ApiError> {
    parse_id(raw).ok_or_else(ApiError::todo_not_found)
}

// =============================================================================
// READ
// =============================================================================

/// List all todos in insertion order
pub fn list_todos(repo: &dyn TodoRepository) -> Result<Vec<Todo>, ApiError> {
    Ok(repo.list()?)
}

/// Get a single todo by id
pub fn get_todo(repo: &dyn TodoRepository, id: &str) -> Result<Todo, ApiError> {
    let id = require_id(id)?;
    Ok(repo.get(id)?)
}

// =============================================================================
// WRITE
// =============================================================================

/// Create a new todo
///
/// Fails with 400 when `text` is missing, not a string, or blank.
pub fn create_todo(repo: &dyn TodoRepository, req: &CreateTodoRequest) -> Result<Todo, ApiError> {
    let text = req.text.as_deref().unwrap_or_default();
    Ok(repo.create(text)?)
}

/// Update a todo's text and/or done flag
///
/// Missing or mistyped fields are left unchanged. The todo's `updatedAt`
/// is refreshed even when nothing else changes.
pub fn update_todo(
    repo: &dyn TodoRepository,
    id: &str,
    req: &UpdateTodoRequest,
) -> Result<Todo, ApiError> {
    let id = require_id(id)?;
    Ok(repo.update(id, &req.to_patch())?)
}

/// Flip a todo's done flag
pub fn toggle_todo(repo: &dyn TodoRepository, id: &str) -> Result<Todo, ApiError> {
    let id = require_id(id)?;
    Ok(repo.toggle_done(id)?)
}

/// Delete a single todo
pub fn delete_todo(repo: &dyn TodoRepository, id: &str) -> Result<(), ApiError> {
    let id = require_id(id)?;
    Ok(repo.delete(id)?)
}

/// Delete every todo. Always succeeds on a healthy store.
pub fn clear_todos(repo: &dyn TodoRepository) -> Result<(), ApiError> {
    Ok(repo.clear()?)
}
