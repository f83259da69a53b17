//! Shared primitives for the widget showcase.
//!
//! This crate holds the small types every other crate in the workspace
//! reaches for when reporting failures. It carries no widget logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): Error plumbing shared by every layer
//! - **models**: Pure data structures
//! - **widget-core**: Widget state machines operating on models
//! - **showcase**: Page wiring, rendering and logging

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
