use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Arithmetic failures. These never escape the calculator: they are
/// turned into the error marker on the display.
#[derive(Debug, ThisError)]
pub enum CalculatorError {
    #[error("Division By Zero Error: {dividend} / 0 {location}")]
    DivisionByZero {
        dividend: f64,
        location: ErrorLocation,
    },

    #[error("Non Finite Result Error: {message} {location}")]
    NonFinite {
        message: String,
        location: ErrorLocation,
    },
}
