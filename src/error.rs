//! Errors surfaced to API clients.
//!
//! Only two kinds exist: a request body that does not deserialize into the
//! expected shape, and a lookup by identifier that misses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Body failed to parse, or a field is missing or has the wrong type.
    #[error("invalid request body: {message}")]
    Validation { kind: &'static str, message: String },

    /// `what` names the missing resource, e.g. "User".
    #[error("{what} not found")]
    NotFound { what: &'static str },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    #[must_use]
    pub fn validation(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound { what }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            _ => "json_invalid",
        };
        let message = rejection.body_text();
        warn!(kind, %message, "request body rejected");
        Self::validation(kind, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation { kind, message } => json!({
                "detail": [{ "loc": ["body"], "msg": message, "type": kind }]
            }),
            Self::NotFound { .. } => json!({ "detail": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
