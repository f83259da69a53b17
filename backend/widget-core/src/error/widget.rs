use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Host-side misuse of a widget: events that reference something the
/// widget does not have.
#[derive(Debug, ThisError)]
pub enum WidgetError {
    #[error("Unknown Panel Error: {message} {location}")]
    UnknownPanel {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Task Error: {message} {location}")]
    UnknownTask {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rating Out Of Range Error: {message} {location}")]
    RatingOutOfRange {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Key Error: {message} {location}")]
    InvalidKey {
        message: String,
        location: ErrorLocation,
    },
}
