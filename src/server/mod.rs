//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//!
//! - `router` - maps method + path + body to an [`router::HttpReply`]
//! - `tiny_http` - lightweight blocking server that feeds the router

pub mod router;
pub mod tiny_http;

pub use router::{HttpReply, dispatch};
pub use self::tiny_http::TodoServer;
