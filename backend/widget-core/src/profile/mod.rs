//! Random profile card.
//!
//! Split in three:
//! - [`client`]: the HTTP call to the identity-generation endpoint
//! - [`fetch`]: the single in-flight request as an abortable task
//! - [`generator`]: the Idle/Loading/Ready/Failed state machine the card renders

pub mod client;
pub mod fetch;
pub mod generator;

pub use client::ProfileClient;
pub use fetch::{FetchOutcome, FetchTask};
pub use generator::{ProfileGenerator, ProfileStatus, ProfileView};

use crate::error::profile::ProfileError;

use models::Profile;

use std::future::Future;

/// Anything that can produce one profile per call.
pub trait ProfileSource: Send + Sync + 'static {
    fn fetch_profile(&self) -> impl Future<Output = Result<Profile, ProfileError>> + Send;
}
