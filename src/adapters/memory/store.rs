//! Mutex-guarded todo collection
//!
//! Every operation takes the lock exactly once, so mutations never
//! interleave.

use std::sync::{Mutex, MutexGuard};

use crate::core::TodoError;
use crate::core::models::{Todo, TodoId, TodoPatch};
use crate::core::ports::TodoRepository;

/// First id handed out by a fresh store
const FIRST_ID: TodoId = 1;

#[derive(Debug)]
struct State {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl State {
    fn find_mut(&mut self, id: TodoId) -> Result<&mut Todo, TodoError> {
        self.todos.iter_mut().find(|t| t.id == id).ok_or(TodoError::NotFound(id))
    }
}

/// Process-local todo repository
///
/// Holds todos in insertion order. Nothing is persisted.
#[derive(Debug)]
pub struct MemoryTodoRepository {
    state: Mutex<State>,
}

impl MemoryTodoRepository {
    /// Create an empty repository whose first id is 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State {
                todos: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, TodoError> {
        self.state.lock().map_err(|_| TodoError::StorePoisoned)
    }
}

impl Default for MemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for MemoryTodoRepository {
    fn list(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.lock()?.todos.clone())
    }

    fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.lock()?
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TodoError::NotFound(id))
    }

    fn create(&self, text: &str) -> Result<Todo, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::InvalidText);
        }

        let mut state = self.lock()?;
        let id = state.next_id;
        state.next_id += 1;

        let todo = Todo::new(id, text.to_string());
        state.todos.push(todo.clone());
        log::debug!("created todo {id}");
        Ok(todo)
    }

    fn update(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, TodoError> {
        let mut state = self.lock()?;
        let todo = state.find_mut(id)?;
        todo.apply(patch);
        log::debug!("updated todo {id}");
        Ok(todo.clone())
    }

    fn toggle_done(&self, id: TodoId) -> Result<Todo, TodoError> {
        let mut state = self.lock()?;
        let todo = state.find_mut(id)?;
        todo.toggle();
        log::debug!("toggled todo {id} (done = {})", todo.done);
        Ok(todo.clone())
    }

    fn delete(&self, id: TodoId) -> Result<(), TodoError> {
        let mut state = self.lock()?;
        let before = state.todos.len();
        state.todos.retain(|t| t.id != id);
        if state.todos.len() == before {
            return Err(TodoError::NotFound(id));
        }
        log::debug!("deleted todo {id}");
        Ok(())
    }

    fn clear(&self) -> Result<(), TodoError> {
        let mut state = self.lock()?;
        let removed = state.todos.len();
        state.todos.clear();
        log::debug!("cleared {removed} todos");
        Ok(())
    }

    fn len(&self) -> Result<usize, TodoError> {
        Ok(self.lock()?.todos.len())
    }
}
