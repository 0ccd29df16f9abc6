//! Maps domain errors to HTTP responses.
//!
//! Authentication failures are contract-level results, not transport
//! errors: they come back as HTTP 200 with `{success: false, message}`
//! and clients branch on the `success` field. Status codes are reserved
//! for malformed input (400) and infrastructure failures (500).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use lexbook_auth::AuthError;
use lexbook_core::error::{AppError, ErrorKind};

/// Failure body shared by every error path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message the client can render.
    pub message: String,
}

impl FailureResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Error type returned by every handler.
#[derive(Debug)]
pub enum ApiError {
    /// Authentication-flow failure, reported with HTTP 200.
    Auth(AuthError),
    /// Infrastructure or validation failure, reported with 4xx/5xx.
    App(AppError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::Auth(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(err) => {
                (StatusCode::OK, Json(FailureResponse::new(err.to_string()))).into_response()
            }
            Self::App(err) => {
                let status = match err.kind {
                    ErrorKind::Validation => StatusCode::BAD_REQUEST,
                    ErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ErrorKind::Conflict => StatusCode::CONFLICT,
                    _ => {
                        tracing::error!(error = %err, "internal server error");
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
                    "Internal server error".to_string()
                } else {
                    err.message.clone()
                };
                (status, Json(FailureResponse::new(message))).into_response()
            }
        }
    }
}
