use crate::error::profile::ProfileError;
use crate::profile::{FetchOutcome, FetchTask, ProfileSource};
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;
use models::Profile;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, error, info, warn};

pub const GENERATE_LABEL: &str = "Generate User";
pub const LOADING_LABEL: &str = "Loading...";
pub const GENERATE_NEW_LABEL: &str = "Generate New User";
pub const TRY_AGAIN_LABEL: &str = "Try Again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Idle,
    /// A request is in flight; the trigger is disabled.
    Loading,
    Ready,
    Failed,
}

impl ProfileStatus {
    pub fn trigger_label(self) -> &'static str {
        match self {
            ProfileStatus::Idle => GENERATE_LABEL,
            ProfileStatus::Loading => LOADING_LABEL,
            ProfileStatus::Ready => GENERATE_NEW_LABEL,
            ProfileStatus::Failed => TRY_AGAIN_LABEL,
        }
    }

    pub fn trigger_enabled(self) -> bool {
        self != ProfileStatus::Loading
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub status: ProfileStatus,
    pub trigger_label: &'static str,
    pub trigger_enabled: bool,
    pub profile: Option<Profile>,
}

/// State machine behind the profile card.
///
/// `Loading` is the only concurrency guard: a second [`generate`] while a
/// request is in flight is refused, so at most one fetch is ever racing.
///
/// [`generate`]: ProfileGenerator::generate
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    status: ProfileStatus,
    /// Status to return to if the in-flight request is abandoned.
    settled: ProfileStatus,
    profile: Option<Profile>,
}

impl ProfileGenerator {
    pub fn new() -> Self {
        Self {
            status: ProfileStatus::Idle,
            settled: ProfileStatus::Idle,
            profile: None,
        }
    }

    pub fn status(&self) -> ProfileStatus {
        self.status
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Enter `Loading` without starting a request.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Busy`] if a request is already in flight.
    #[track_caller]
    pub fn begin(&mut self) -> Result<(), ProfileError> {
        if self.status == ProfileStatus::Loading {
            return Err(ProfileError::Busy {
                message: String::from("A profile request is already in flight"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.settled = self.status;
        self.status = ProfileStatus::Loading;
        debug!("Profile generation started");
        Ok(())
    }

    /// Enter `Loading` and spawn the request.
    ///
    /// The caller awaits [`FetchTask::outcome`] and passes the result to
    /// [`finish`](Self::finish); nothing here holds the generator across
    /// the network round-trip.
    #[track_caller]
    pub fn generate<S: ProfileSource>(&mut self, source: Arc<S>) -> Result<FetchTask, ProfileError> {
        self.begin()?;
        Ok(FetchTask::spawn(source))
    }

    /// Apply the outcome of the in-flight request.
    pub fn finish(&mut self, outcome: FetchOutcome) -> ProfileStatus {
        if self.status != ProfileStatus::Loading {
            warn!("Discarding profile outcome received while {:?}", self.status);
            return self.status;
        }

        self.status = match outcome {
            FetchOutcome::Ready(profile) => {
                info!("Profile generated for {}", profile.full_name());
                self.profile = Some(profile);
                ProfileStatus::Ready
            }
            FetchOutcome::Failed(e) => {
                error!("Error fetching random user: {e}");
                ProfileStatus::Failed
            }
            FetchOutcome::Abandoned => {
                debug!("Profile request abandoned");
                self.settled
            }
        };
        self.status
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ProfileGenerator {
    fn view(&self) -> WidgetView {
        WidgetView::Profile(ProfileView {
            status: self.status,
            trigger_label: self.status.trigger_label(),
            trigger_enabled: self.status.trigger_enabled(),
            profile: self.profile.clone(),
        })
    }
}
