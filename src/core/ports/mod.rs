//! Port traits (interfaces) for storage backends
//!
//! The API layer depends only on [`TodoRepository`], never on a concrete
//! store. Implementations live in the `adapters` module.

mod todo_repo;

pub use todo_repo::TodoRepository;
