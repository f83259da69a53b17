//! Domain models for the widget showcase.
//!
//! Pure data structures shared between widget logic and the page host.
//! Models carry validation on construction but no behavior beyond that.

pub mod error;
pub mod profile;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use profile::Profile;
pub use profile::builder::ProfileBuilder;

#[cfg(test)]
mod tests;
