//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure handlers
//! that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or called directly.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take a repository and typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorBody, ErrorCode};
pub use handlers::{
    clear_todos, create_todo, delete_todo, get_todo, list_todos, parse_id, toggle_todo,
    update_todo,
};
pub use types::{CreateTodoRequest, UpdateTodoRequest};
