//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body:
//! `{"error": "message"}`, plus `"fields"` for validation failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use labdesk_core::ValidationErrors;
use labdesk_service::ServiceError;
use labdesk_storage::StorageError;

/// `Internal` logs the real error server-side and returns a static message.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 404 Not Found
    NotFound(String),
    /// 409 Conflict: a multi-step write stopped part way.
    Conflict(String),
    /// 422 Unprocessable Entity: field validation failed.
    Validation(ValidationErrors),
    /// 422 Unprocessable Entity: the store rejected the write.
    UnprocessableEntity(String),
    /// 500 Internal Server Error
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, serde_json::json!({"error": msg})),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, serde_json::json!({"error": msg})),
            Self::Conflict(msg) => (StatusCode::CONFLICT, serde_json::json!({"error": msg})),
            Self::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                serde_json::json!({"error": "validation failed", "fields": fields}),
            ),
            Self::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, serde_json::json!({"error": msg}))
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({"error": "internal server error"}),
                )
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(fields) => Self::Validation(fields),
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::Storage(StorageError::Constraint(msg)) => Self::UnprocessableEntity(msg),
            ServiceError::PartialWrite { .. } => Self::Conflict(err.to_string()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}
