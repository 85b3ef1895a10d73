//! Core domain logic for todos
//!
//! This module contains the to-do model and the storage contract.
//! It has no HTTP or process dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types ([`models::Todo`])
//! - `ports/` - Trait definitions for storage backends
//! - `error` - Error taxonomy shared by every backend

pub mod error;
pub mod models;
pub mod ports;

pub use error::TodoError;
