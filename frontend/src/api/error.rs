use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::utils::storage::StorageError;

pub const LOGIN_FALLBACK_MESSAGE: &str = "Authentication failed. Please try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Rejected before any request was sent.
    Validation,
    /// 401 from the API, or no usable session.
    Authentication,
    /// Any other non-success answer from the API.
    Remote,
    /// No response at all.
    Network,
    /// A success answer missing what the client needs.
    InvalidResponse,
    Storage,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub details: Option<Value>,
}

impl ApiError {
    fn new(kind: ApiErrorKind, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            kind,
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, msg)
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Authentication, msg)
    }

    pub fn session_expired() -> Self {
        Self {
            status: Some(401),
            ..Self::authentication(SESSION_EXPIRED_MESSAGE)
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, msg)
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::InvalidResponse, msg)
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Storage, msg)
    }

    /// Builds the error for a non-success answer. The message comes from the
    /// structured body when there is one, else the raw body, else the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(describe_error_body)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self::remote(status, message, parsed)
    }

    /// Login failures only surface `detail` or the first non-field error.
    pub fn from_login_rejection(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(primary_message)
            .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string());
        Self::remote(status, message, parsed)
    }

    fn remote(status: u16, message: String, details: Option<Value>) -> Self {
        let kind = if status == 401 {
            ApiErrorKind::Authentication
        } else {
            ApiErrorKind::Remote
        };
        Self {
            error: message,
            kind,
            status: Some(status),
            details,
        }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Validation => "VALIDATION_ERROR",
            ApiErrorKind::Authentication => "AUTHENTICATION_ERROR",
            ApiErrorKind::Remote => "REMOTE_ERROR",
            ApiErrorKind::Network => "REQUEST_FAILED",
            ApiErrorKind::InvalidResponse => "INVALID_RESPONSE",
            ApiErrorKind::Storage => "STORAGE_ERROR",
        }
    }

    pub fn is_authentication(&self) -> bool {
        self.kind == ApiErrorKind::Authentication
    }
}

impl From<StorageError> for ApiError {
    fn from(error: StorageError) -> Self {
        Self::storage(error.to_string())
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

/// `detail`, then `non_field_errors[0]`.
pub fn primary_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }
    body.get("non_field_errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// `primary_message`, then per-field errors joined as `field: msg; ...`.
pub fn describe_error_body(body: &Value) -> Option<String> {
    if let Some(message) = primary_message(body) {
        return Some(message);
    }
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    let fields = body.as_object()?;
    let parts: Vec<String> = fields
        .iter()
        .filter_map(|(field, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => return None,
            };
            (!text.is_empty()).then(|| format!("{field}: {text}"))
        })
        .collect();
    if parts.is_empty() {
        Some(body.to_string())
    } else {
        Some(parts.join("; "))
    }
}
