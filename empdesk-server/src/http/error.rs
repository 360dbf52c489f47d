//! API error types with IntoResponse
//!
//! Errors are rendered as HTML message pages. A missing employee is reported
//! with `200 OK` and the not-found message, matching how the form pages have
//! always behaved; a 404 would be the conventional status.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::models::ValidationError;
use crate::store::StoreError;
use crate::views;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Submitted form failed conversion (400)
    Validation(ValidationError),

    /// Body could not be read as a form at all (400)
    BadForm { message: String },

    /// Employee id names no row (200, not-found message)
    NotFound { id: String },

    /// Store error (500, logged)
    Database(StoreError),

    /// Internal error (500)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, text) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadForm { message } => (StatusCode::BAD_REQUEST, message.clone()),
            Self::NotFound { id } => {
                tracing::debug!(id = %id, "employee not found");
                (StatusCode::OK, views::EMPLOYEE_NOT_FOUND.to_string())
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred.".to_string(),
                )
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred.".to_string(),
                )
            }
        };

        (status, Html(views::message(&text))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<FormRejection> for ApiError {
    fn from(e: FormRejection) -> Self {
        Self::BadForm {
            message: e.body_text(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id } => Self::NotFound { id: id.to_string() },
            _ => Self::Database(e),
        }
    }
}
