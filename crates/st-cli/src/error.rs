use crate::client::ClientError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Core(#[from] st_core::CoreError),

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A referenced entity is missing from the in-memory state
    #[error("{what} not found with ID: {id} {location}")]
    NotFound {
        what: &'static str,
        id: String,
        location: ErrorLocation,
    },

    /// Rejected because another operation is still in flight
    #[error("Another operation is already in progress {location}")]
    Busy { location: ErrorLocation },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl AppError {
    #[track_caller]
    pub fn not_found<I: ToString>(what: &'static str, id: I) -> Self {
        AppError::NotFound {
            what,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn busy() -> Self {
        AppError::Busy {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type AppResult<T> = StdResult<T, AppError>;
