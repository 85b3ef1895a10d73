//! Adapter implementations for port traits
//!
//! - `memory/` - process-local todo storage, discarded on restart

pub mod memory;
