use cw_core::{CoreError, ErrorLocation};

use std::panic::Location;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Wallet link not found on {url} {location}")]
    LinkNotFound {
        url: String,
        location: ErrorLocation,
    },

    #[error("Navigation to {url} failed: {message} {location}")]
    Navigation {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Browser session error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },

    #[error("Browser session exceeded {after_secs}s {location}")]
    Timeout {
        after_secs: u64,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[from]
        source: CoreError,
    },
}

impl CrawlError {
    #[track_caller]
    pub fn link_not_found(url: impl Into<String>) -> Self {
        Self::LinkNotFound {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn navigation(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Navigation {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            after_secs: after.as_secs(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the location suffix, suitable for API clients
    pub fn client_message(&self) -> String {
        match self {
            CrawlError::LinkNotFound { .. } => {
                "Public wallet link not found on this certificate page".to_string()
            }
            CrawlError::Navigation { url, message, .. } => {
                format!("Failed to load {}: {}", url, message)
            }
            CrawlError::Session { message, .. } => format!("Browser session failed: {}", message),
            CrawlError::Timeout { after_secs, .. } => {
                format!("Browser session timed out after {}s", after_secs)
            }
            CrawlError::Core { source } => source.client_message(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CrawlError>;
