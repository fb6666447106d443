//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use planetary_auth::AuthError;
use planetary_core::CoreError;
use planetary_db::DbError;
use planetary_mail::MailError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND",
                message,
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR",
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT",
                message,
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED",
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR",
                message,
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST",
                message,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.message().to_string(),
            field: Some(e.field().to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { constraint, .. } => {
                log::debug!("Unique constraint {} rejected a write", constraint);
                ApiError::Conflict {
                    message: "That record already exists".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert token errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_unauthorized() {
            log::debug!("Token rejected ({}): {}", e.error_code(), e);
            ApiError::Unauthorized {
                message: e.client_message(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            log::error!("Token error: {}", e);
            ApiError::Internal {
                message: e.client_message(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

/// Convert mail errors to API errors
impl From<MailError> for ApiError {
    #[track_caller]
    fn from(e: MailError) -> Self {
        log::error!("Mail error: {}", e);
        ApiError::Internal {
            message: "Failed to send email".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
