use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Read failure; carries the HTTP status and status text
    #[error("API error: {status} - {status_text} {location}")]
    Status {
        status: u16,
        status_text: String,
        location: ErrorLocation,
    },

    /// Write failure; additionally carries the raw response body so
    /// server-side validation messages reach the user
    #[error("API error: {status} - {status_text}\n{body} {location}")]
    Write {
        status: u16,
        status_text: String,
        body: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Create a read-failure error with location
    #[track_caller]
    pub fn status(status: u16, status_text: String) -> Self {
        ClientError::Status {
            status,
            status_text,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a write-failure error with location
    #[track_caller]
    pub fn write(status: u16, status_text: String, body: String) -> Self {
        ClientError::Write {
            status,
            status_text,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
