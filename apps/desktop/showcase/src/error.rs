use widget_core::error::CoreError;
use widget_core::error::config::ConfigError;
use widget_core::error::profile::ProfileError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the page host.
///
/// Widget-level problems never reach here; they are logged and the page
/// stays interactive. These cover setup and host-side misuse.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Error from this App
    #[error("Showcase Error: {message} {location}")]
    Showcase {
        message: String,
        location: ErrorLocation,
    },

    /// Error from widget-core (config, profile client)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// The page actor is gone
    #[error("Page Closed Error: {message} {location}")]
    PageClosed {
        message: String,
        location: ErrorLocation,
    },

    /// A host command line could not be understood
    #[error("Command Error: {message} {location}")]
    Command {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for ShowcaseError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        ShowcaseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ShowcaseError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ShowcaseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProfileError> for ShowcaseError {
    #[track_caller]
    fn from(error: ProfileError) -> Self {
        ShowcaseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
