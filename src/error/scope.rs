use axum::{
    Json, extract::rejection::BytesRejection, http::StatusCode, response::IntoResponse,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::inspect::InspectError;

#[derive(Debug, ThisError)]
pub enum ScopeError {
    #[error(transparent)]
    Inspect(#[from] InspectError),

    #[error("Request body rejected: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Request body is not UTF-8: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl IntoResponse for ScopeError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            ScopeError::Inspect(InspectError::EmptyToken) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "EMPTY_TOKEN".to_string(),
                    message: "No token was supplied.".to_string(),
                    details: None,
                },
            ),

            ScopeError::Inspect(InspectError::SegmentCount(found)) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "MALFORMED_TOKEN".to_string(),
                    message: "A JWT must have exactly three dot-separated segments.".to_string(),
                    details: Some(serde_json::json!({ "segments": found })),
                },
            ),

            ScopeError::BodyRejected(rejection) => {
                let status = rejection.status();
                let code = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "TOKEN_TOO_LARGE"
                } else {
                    "INVALID_BODY"
                };
                (
                    status,
                    ApiErrorObject {
                        code: code.to_string(),
                        message: rejection.body_text(),
                        details: None,
                    },
                )
            }

            ScopeError::JsonError(_) | ScopeError::Utf8Error(_) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "INVALID_BODY".to_string(),
                    message: "Failed to read the request body.".to_string(),
                    details: None,
                },
            ),

            ScopeError::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
