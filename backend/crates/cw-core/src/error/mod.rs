use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid URL for {field}: {value} ({source}) {location}")]
    InvalidUrl {
        field: String,
        value: String,
        source: url::ParseError,
        location: ErrorLocation,
    },

    #[error("Invalid identifier pattern: {source} {location}")]
    Pattern {
        source: regex::Error,
        location: ErrorLocation,
    },

    #[error("Invalid profile status: {value} {location}")]
    InvalidProfileStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid credential status: {value} {location}")]
    InvalidCredentialStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid platform: {value} {location}")]
    InvalidPlatform {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error tied to a request field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field name for validation-style errors
    pub fn field(&self) -> Option<&str> {
        match self {
            CoreError::Validation { field, .. } => field.as_deref(),
            CoreError::InvalidUrl { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Message without the location suffix, suitable for API clients
    pub fn client_message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidUrl { field, value, .. } => {
                format!("{} is not a valid URL: {}", field, value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
