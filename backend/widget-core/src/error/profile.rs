use common::{ErrorLocation, HttpStatusCode};
use models::ModelError;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ProfileError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} ({category}) - {message} {location}", category = .status.category())]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Empty Results Error: {message} {location}")]
    EmptyResults {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Profile Error: {message} {location}")]
    InvalidProfile {
        message: String,
        location: ErrorLocation,
    },

    #[error("Task Error: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    #[error("Busy Error: {message} {location}")]
    Busy {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for ProfileError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ProfileError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ProfileError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ProfileError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ProfileError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ModelError> for ProfileError {
    #[track_caller]
    fn from(error: ModelError) -> Self {
        ProfileError::InvalidProfile {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
