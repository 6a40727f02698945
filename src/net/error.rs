//! API error taxonomy and response classification.
//!
//! The backend wraps every failure in a `{"detail": ...}` envelope where
//! `detail` is either a message string or, for validation failures, a list
//! of `{loc, msg}` entries. `from_response` flattens that envelope into a
//! typed error so callers can branch on what went wrong instead of string
//! matching in page code.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// A single failed field from a validation response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors surfaced by the REST API layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Please correct the highlighted fields")]
    Validation(Vec<FieldError>),
    #[error("{0}")]
    Conflict(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("Too many attempts. Please wait a few minutes and try again.")]
    RateLimited,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected server response ({status}): {detail}")]
    Unexpected { status: u16, detail: String },
}

impl ApiError {
    /// Stub error for builds without a browser network stack.
    pub(crate) fn offline() -> Self {
        Self::Network("not available on server".to_owned())
    }
}

/// Classify a non-2xx response by status code and body.
pub fn from_response(status: u16, body: &str) -> ApiError {
    match parse_detail(body) {
        Detail::Fields(errors) => ApiError::Validation(errors),
        Detail::Text(text) => {
            // The login lockout is reported by message, not by a dedicated
            // status, so check it before the status switch.
            if status == 429 || text.contains("Too many") {
                return ApiError::RateLimited;
            }
            match status {
                401 => ApiError::Unauthorized,
                403 => ApiError::Forbidden(text),
                404 => ApiError::NotFound(text),
                400 | 409 => ApiError::Conflict(text),
                _ => ApiError::Unexpected {
                    status,
                    detail: text,
                },
            }
        }
    }
}

enum Detail {
    Text(String),
    Fields(Vec<FieldError>),
}

fn parse_detail(body: &str) -> Detail {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Detail::Text(fallback_text(body));
    };
    match value.get("detail") {
        Some(serde_json::Value::String(text)) => Detail::Text(text.clone()),
        Some(serde_json::Value::Array(items)) => {
            let errors: Vec<FieldError> = items.iter().filter_map(parse_field_error).collect();
            if errors.is_empty() {
                Detail::Text(fallback_text(body))
            } else {
                Detail::Fields(errors)
            }
        }
        _ => Detail::Text(fallback_text(body)),
    }
}

/// One `{loc: ["body", "email"], msg: "..."}` entry into a `FieldError`.
/// The leading `body` segment is routing noise and dropped.
fn parse_field_error(item: &serde_json::Value) -> Option<FieldError> {
    let msg = item.get("msg")?.as_str()?.to_owned();
    let field = item
        .get("loc")
        .and_then(serde_json::Value::as_array)
        .map(|loc| {
            loc.iter()
                .filter_map(serde_json::Value::as_str)
                .filter(|seg| *seg != "body")
                .collect::<Vec<_>>()
                .join(".")
        })
        .unwrap_or_default();
    Some(FieldError {
        field,
        message: msg,
    })
}

fn fallback_text(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed".to_owned()
    } else {
        trimmed.to_owned()
    }
}
