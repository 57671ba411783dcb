//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use cw_core::CoreError;
use cw_crawl::CrawlError;
use cw_db::DbError;
use cw_sync::SyncError;

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
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "LINK_NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or disallowed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Certificate page has no wallet link (404)
    #[error("Wallet link not found: {message} {location}")]
    LinkNotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Page load, browser session or deadline failure (502)
    #[error("Navigation failed: {message} {location}")]
    Navigation {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::LinkNotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "LINK_NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Navigation { message, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "NAVIGATION_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.client_message(),
            field: e.field().map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CrawlError> for ApiError {
    #[track_caller]
    fn from(e: CrawlError) -> Self {
        let message = e.client_message();
        let location = ErrorLocation::from(Location::caller());

        match e {
            CrawlError::LinkNotFound { .. } => ApiError::LinkNotFound { message, location },
            CrawlError::Core { source } => ApiError::from(source),
            CrawlError::Navigation { .. }
            | CrawlError::Session { .. }
            | CrawlError::Timeout { .. } => ApiError::Navigation { message, location },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Validation(source) => ApiError::from(source),
            SyncError::Crawl(source) => ApiError::from(source),
            SyncError::Persistence(source) => ApiError::from(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
