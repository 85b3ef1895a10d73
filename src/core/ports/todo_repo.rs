//! Todo repository port
//!
//! Defines the interface for holding and mutating the todo collection.

use super::super::error::TodoError;
use super::super::models::{Todo, TodoId, TodoPatch};

/// Owner of the todo collection and its id counter
///
/// Implementations must serialize mutating operations so that ids stay
/// unique and no update is lost. Ids are strictly increasing over the
/// lifetime of a repository, even across deletes and [`clear`](Self::clear).
pub trait TodoRepository: Send + Sync {
    /// All todos in insertion order
    fn list(&self) -> Result<Vec<Todo>, TodoError>;

    /// Find a todo by id
    fn get(&self, id: TodoId) -> Result<Todo, TodoError>;

    /// Trim `text`, assign the next id and append a pending todo.
    ///
    /// Fails with [`TodoError::InvalidText`] if `text` is blank.
    fn create(&self, text: &str) -> Result<Todo, TodoError>;

    /// Apply `patch` to a todo and stamp its `updated_at`
    fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, TodoError>;

    /// Flip a todo's done flag and stamp its `updated_at`
    fn toggle_done(&self, id: TodoId) -> Result<Todo, TodoError>;

    /// Remove a todo. Fails with [`TodoError::NotFound`] if nothing was removed.
    fn delete(&self, id: TodoId) -> Result<(), TodoError>;

    /// Remove every todo. The id counter is not reset.
    fn clear(&self) -> Result<(), TodoError>;

    /// Number of todos currently held
    fn len(&self) -> Result<usize, TodoError> {
        Ok(self.list()?.len())
    }

    /// Whether the collection is empty
    fn is_empty(&self) -> Result<bool, TodoError> {
        Ok(self.len()? == 0)
    }
}
