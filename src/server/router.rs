//! Request routing
//!
//! Maps a method, URL and body onto the API handlers and converts the
//! outcome into an [`HttpReply`]. Nothing here touches a socket, so the
//! full request/response contract can be exercised in-process.

use std::any::Any;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tiny_http::Method;

use crate::api::{self, ApiError, CreateTodoRequest, UpdateTodoRequest};
use crate::core::ports::TodoRepository;

/// Prefix under which unmatched routes answer with JSON
pub const API_PREFIX: &str = "/api/";

/// Collection path of the todo resource
pub const TODOS_PATH: &str = "/api/todos";

/// Largest accepted request body (100 KiB)
pub const MAX_BODY_BYTES: u64 = 100 * 1024;

const JSON: &str = "application/json";
const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

/// A fully rendered response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` header value, absent for empty bodies
    pub content_type: Option<&'static str>,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpReply {
    /// Serialize `data` as a JSON response with the given status
    pub fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => Self {
                status,
                content_type: Some(JSON),
                body,
            },
            Err(e) => Self::error(&ApiError::internal(format!("Failed to encode response: {e}"))),
        }
    }

    /// JSON error response with the error's status code
    #[must_use]
    pub fn error(error: &ApiError) -> Self {
        let body = serde_json::to_vec(&error.body()).unwrap_or_default();
        Self {
            status: error.status_code(),
            content_type: Some(JSON),
            body,
        }
    }

    /// Empty 204 response
    #[must_use]
    pub const fn no_content() -> Self {
        Self {
            status: 204,
            content_type: None,
            body: Vec::new(),
        }
    }

    /// 404 for a path no route matched: JSON under `/api/`, plain text elsewhere
    #[must_use]
    pub fn unmatched(path: &str) -> Self {
        if path.starts_with(API_PREFIX) {
            Self::error(&ApiError::not_found("Not found"))
        } else {
            Self {
                status: 404,
                content_type: Some(PLAIN_TEXT),
                body: b"Not found".to_vec(),
            }
        }
    }

    /// Body decoded as JSON
    pub fn json_body(&self) -> serde_json::Result<Value> {
        serde_json::from_slice(&self.body)
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Route a request, turning a panic inside a handler into a 500 reply
pub fn dispatch(
    repo: &dyn TodoRepository,
    method: &Method,
    url: &str,
    body: &mut dyn Read,
) -> HttpReply {
    match panic::catch_unwind(AssertUnwindSafe(|| route(repo, method, url, body))) {
        Ok(reply) => reply,
        Err(payload) => {
            let message = panic_message(payload.as_ref()).unwrap_or(ApiError::INTERNAL_MESSAGE);
            log::error!("SERVER ERROR: {method} {url}: {message}");
            HttpReply::error(&ApiError::internal(message))
        },
    }
}

/// Route a request to its handler
pub fn route(
    repo: &dyn TodoRepository,
    method: &Method,
    url: &str,
    body: &mut dyn Read,
) -> HttpReply {
    let raw_path = strip_query(url);
    let path = normalize_path(raw_path);

    if path == TODOS_PATH {
        return match method {
            Method::Get => handle_result(200, api::list_todos(repo)),
            Method::Post => match read_json_body::<CreateTodoRequest>(body) {
                Ok(req) => handle_result(201, api::create_todo(repo, &req)),
                Err(e) => reply_error(&e),
            },
            Method::Delete => handle_empty(api::clear_todos(repo)),
            _ => HttpReply::unmatched(raw_path),
        };
    }

    let Some(rest) = path.strip_prefix(TODOS_PATH).and_then(|s| s.strip_prefix('/')) else {
        return HttpReply::unmatched(raw_path);
    };

    // PATCH /api/todos/{id}/done
    if let Some(id) = rest.strip_suffix("/done").filter(|id| is_segment(id)) {
        return match method {
            Method::Patch => handle_result(200, api::toggle_todo(repo, id)),
            _ => HttpReply::unmatched(raw_path),
        };
    }

    if !is_segment(rest) {
        return HttpReply::unmatched(raw_path);
    }

    let id = rest;
    match method {
        Method::Get => handle_result(200, api::get_todo(repo, id)),
        Method::Put => match read_json_body::<UpdateTodoRequest>(body) {
            Ok(req) => handle_result(200, api::update_todo(repo, id, &req)),
            Err(e) => reply_error(&e),
        },
        Method::Delete => handle_empty(api::delete_todo(repo, id)),
        _ => HttpReply::unmatched(raw_path),
    }
}

/// Drop the query string and fragment
fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

/// Drop the query string and a single trailing slash
fn normalize_path(url: &str) -> &str {
    let path = strip_query(url);
    match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    }
}

fn is_segment(s: &str) -> bool {
    !s.is_empty() && !s.contains('/')
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .filter(|m| !m.is_empty())
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse a JSON body
///
/// An empty body, or a JSON value that is not an object, yields `T::default()`.
/// Bodies over [`MAX_BODY_BYTES`] are rejected with 413.
fn read_json_body<T: DeserializeOwned + Default>(body: &mut dyn Read) -> Result<T, ApiError> {
    let mut raw = Vec::new();
    body.take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    if raw.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiError::payload_too_large("request entity too large"));
    }

    if raw.trim_ascii().is_empty() {
        return Ok(T::default());
    }

    let value: Value = serde_json::from_slice(&raw)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))?;
    if !value.is_object() {
        return Ok(T::default());
    }

    serde_json::from_value(value).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

fn handle_result<T: Serialize>(status: u16, result: Result<T, ApiError>) -> HttpReply {
    match result {
        Ok(data) => HttpReply::json(status, &data),
        Err(e) => reply_error(&e),
    }
}

fn handle_empty(result: Result<(), ApiError>) -> HttpReply {
    match result {
        Ok(()) => HttpReply::no_content(),
        Err(e) => reply_error(&e),
    }
}

fn reply_error(error: &ApiError) -> HttpReply {
    if error.code == api::ErrorCode::Internal {
        log::error!("SERVER ERROR: {}", error.message);
    }
    HttpReply::error(error)
}
