use crate::error::profile::ProfileError;
use crate::profile::ProfileSource;

use common::ErrorLocation;
use models::Profile;

use std::panic::Location;
use std::sync::Arc;

use log::warn;
use tokio::task::{AbortHandle, JoinHandle};

/// How an in-flight fetch ended.
#[derive(Debug)]
pub enum FetchOutcome {
    Ready(Profile),
    Failed(ProfileError),
    /// Aborted before it resolved, e.g. because the page went away.
    Abandoned,
}

/// One outbound profile request running on the tokio runtime.
///
/// Single-shot: it resolves exactly once, and can be aborted but not
/// restarted.
#[derive(Debug)]
pub struct FetchTask {
    handle: JoinHandle<Result<Profile, ProfileError>>,
}

impl FetchTask {
    /// Spawn the request. Must be called from within a tokio runtime.
    pub fn spawn<S: ProfileSource>(source: Arc<S>) -> Self {
        let handle = tokio::spawn(async move { source.fetch_profile().await });
        Self { handle }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.abort_handle()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the request to settle.
    pub async fn outcome(self) -> FetchOutcome {
        match self.handle.await {
            Ok(Ok(profile)) => FetchOutcome::Ready(profile),
            Ok(Err(e)) => FetchOutcome::Failed(e),
            Err(e) if e.is_cancelled() => FetchOutcome::Abandoned,
            Err(e) => {
                warn!("Profile fetch task panicked: {e}");
                FetchOutcome::Failed(ProfileError::Task {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
