use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::utils::code_generator::GenerationError;

/// Failures of the shortening and resolving operations.
#[derive(Debug, thiserror::Error)]
pub enum ShortenerError {
    /// The long URL is malformed. Never retried.
    #[error("invalid url: {0}")]
    Validation(String),

    /// No mapping exists for the requested short code.
    #[error("short code not found: {0}")]
    NotFound(String),

    /// Every allocation attempt hit an existing code.
    #[error("failed to allocate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Non-retriable backend failure.
    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => f.write_str(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(e: ShortenerError) -> Self {
        match e {
            ShortenerError::Validation(reason) => {
                AppError::bad_request("Invalid URL format", json!({ "reason": reason }))
            }
            ShortenerError::NotFound(code) => {
                AppError::not_found("URL not found", json!({ "code": code }))
            }
            ShortenerError::GenerationExhausted { attempts } => AppError::internal(
                "Failed to generate unique short code",
                json!({ "attempts": attempts }),
            ),
            ShortenerError::Generation(_) => {
                AppError::internal("Failed to generate short code", json!({}))
            }
            ShortenerError::Storage(_) => AppError::internal("Internal server error", json!({})),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Invalid request", details)
    }
}
