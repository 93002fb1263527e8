//! Serverless CRUD — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crud_core::error::{DomainError, FieldError};
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API process.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// The Lambda runtime loop failed.
    #[error("lambda runtime error: {0}")]
    Lambda(String),
}

/// One failed field in a validation error response.
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    /// The offending field.
    pub field: &'static str,
    /// What the field must satisfy.
    pub message: String,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(err: &FieldError) -> Self {
        Self {
            field: err.field,
            message: err.constraint.to_string(),
        }
    }
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Per-field failures; present only for validation errors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldErrorBody>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, fields) = match &self.0 {
            DomainError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                errors.iter().map(FieldErrorBody::from).collect::<Vec<_>>(),
            ),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", Vec::new()),
            DomainError::AmbiguousMatch { .. } => {
                (StatusCode::CONFLICT, "ambiguous_match", Vec::new())
            }
            DomainError::Infrastructure(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "infrastructure_error",
                Vec::new(),
            ),
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}
