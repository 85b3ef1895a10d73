//! Errors raised by todo storage

use thiserror::Error;

use super::models::TodoId;

/// Errors that can occur in a todo store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Text was missing, not a string, or blank after trimming
    #[error("Invalid payload: \"text\" is required")]
    InvalidText,

    /// No todo has the given id
    #[error("Todo not found")]
    NotFound(TodoId),

    /// A previous operation panicked while holding the store lock
    #[error("todo store is unavailable: lock poisoned")]
    StorePoisoned,
}
