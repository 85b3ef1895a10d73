//! Domain models for todos
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Todo`] - a single to-do item
//! - [`TodoId`] - its store-assigned identifier

mod todo;

pub use todo::{Todo, TodoId, TodoPatch, timestamp_now};
