//! API error types with HTTP status code mapping

use serde::{Deserialize, Serialize};

use crate::core::TodoError;

/// Error codes that map to HTTP status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,
    /// Invalid request (400)
    BadRequest,
    /// Request body exceeds the size limit (413)
    PayloadTooLarge,
    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::PayloadTooLarge => 413,
            Self::Internal => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

/// API error with code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error code (determines HTTP status)
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Message used when a fault carries no message of its own
    pub const INTERNAL_MESSAGE: &'static str = "Internal Server Error";

    /// Create a not found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// The 404 returned for any unknown or unparsable todo id
    #[must_use]
    pub fn todo_not_found() -> Self {
        Self::not_found("Todo not found")
    }

    /// Create a bad request error
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message: message.into(),
        }
    }

    /// Create a payload too large error
    #[must_use]
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::PayloadTooLarge,
            message: message.into(),
        }
    }

    /// Create an internal error. An empty message falls back to
    /// [`INTERNAL_MESSAGE`](Self::INTERNAL_MESSAGE).
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            code: ErrorCode::Internal,
            message: if message.is_empty() {
                Self::INTERNAL_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.code.status_code()
    }

    /// JSON body for this error
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody::from(self)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::InvalidText => Self::bad_request(err.to_string()),
            TodoError::NotFound(_) => Self::todo_not_found(),
            TodoError::StorePoisoned => Self::internal(err.to_string()),
        }
    }
}

/// Serializable error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}
