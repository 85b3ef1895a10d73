//! In-memory todo storage
//!
//! Implements `TodoRepository` over a mutex-guarded `Vec`.

mod store;

pub use store::MemoryTodoRepository;
