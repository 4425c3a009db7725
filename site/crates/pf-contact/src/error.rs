use error_location::ErrorLocation;
use std::panic::Location;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while submitting the contact form
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request timed out after {timeout:?} {location}")]
    Timeout {
        timeout: Duration,
        location: ErrorLocation,
    },

    #[error("Endpoint rejected submission: {message} (status: {status}) {location}")]
    Application {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl ContactError {
    /// Create a validation error with location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ContactError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ContactError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn timeout(timeout: Duration) -> Self {
        ContactError::Timeout {
            timeout,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an application error with location
    #[track_caller]
    pub fn application<S: Into<String>>(status: u16, message: S) -> Self {
        ContactError::Application {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The request never produced a response (connectivity or deadline)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ContactError::Transport { .. } | ContactError::Timeout { .. }
        )
    }
}

impl From<reqwest::Error> for ContactError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ContactError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
