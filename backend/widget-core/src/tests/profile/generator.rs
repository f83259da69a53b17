// Unit tests for the profile state machine
// A stub source stands in for the network

use crate::error::profile::ProfileError;
use crate::profile::generator::{GENERATE_LABEL, GENERATE_NEW_LABEL, LOADING_LABEL, TRY_AGAIN_LABEL};
use crate::profile::{FetchOutcome, ProfileGenerator, ProfileSource, ProfileStatus};
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;
use models::Profile;

use std::panic::Location;
use std::sync::Arc;

enum StubSource {
    Succeeds(Profile),
    Fails,
    Hangs,
}

impl ProfileSource for StubSource {
    async fn fetch_profile(&self) -> Result<Profile, ProfileError> {
        match self {
            StubSource::Succeeds(profile) => Ok(profile.clone()),
            StubSource::Fails => Err(ProfileError::Http {
                message: String::from("connection refused"),
                location: ErrorLocation::from(Location::caller()),
            }),
            StubSource::Hangs => std::future::pending().await,
        }
    }
}

fn jane() -> Profile {
    Profile {
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("jane@example.com"),
        avatar_url: String::from("https://example.com/jane.jpg"),
    }
}

fn trigger(generator: &ProfileGenerator) -> (&'static str, bool) {
    let WidgetView::Profile(view) = generator.view() else {
        panic!("generator renders a profile view");
    };
    (view.trigger_label, view.trigger_enabled)
}

#[test]
fn given_new_generator_when_viewed_then_idle_with_enabled_trigger() {
    let generator = ProfileGenerator::new();

    assert_eq!(generator.status(), ProfileStatus::Idle);
    assert_eq!(trigger(&generator), (GENERATE_LABEL, true));
    assert!(generator.profile().is_none());
}

/// **VALUE**: Verifies the full Idle → Loading → Ready path and trigger labels.
#[tokio::test]
async fn given_working_source_when_generated_then_ready_with_profile() {
    // GIVEN: A source that succeeds
    let mut generator = ProfileGenerator::new();
    let source = Arc::new(StubSource::Succeeds(jane()));

    // WHEN: Generating
    let task = generator.generate(source).expect("idle generator accepts");

    // THEN: Loading disables the trigger
    assert_eq!(generator.status(), ProfileStatus::Loading);
    assert_eq!(trigger(&generator), (LOADING_LABEL, false));

    // AND: Once settled, Ready with the profile
    let status = generator.finish(task.outcome().await);
    assert_eq!(status, ProfileStatus::Ready);
    assert_eq!(generator.profile(), Some(&jane()));
    assert_eq!(trigger(&generator), (GENERATE_NEW_LABEL, true));
}

/// **VALUE**: Verifies a failed fetch keeps the previous card and offers a retry.
///
/// **WHY THIS MATTERS**: No partial state is rendered on failure. The user must
/// still see the last good profile and a "Try Again" trigger.
///
/// **BUG THIS CATCHES**: Would catch the profile being cleared on error, or the
/// trigger staying disabled after a failure.
#[tokio::test]
async fn given_profile_shown_when_fetch_fails_then_profile_kept_and_try_again_offered() {
    // GIVEN: A generator that already shows Jane
    let mut generator = ProfileGenerator::new();
    let task = generator
        .generate(Arc::new(StubSource::Succeeds(jane())))
        .unwrap();
    generator.finish(task.outcome().await);

    // WHEN: The next fetch fails
    let task = generator.generate(Arc::new(StubSource::Fails)).unwrap();
    let status = generator.finish(task.outcome().await);

    // THEN: Failed, Jane still shown, trigger re-enabled with retry label
    assert_eq!(status, ProfileStatus::Failed);
    assert_eq!(generator.profile(), Some(&jane()));
    assert_eq!(trigger(&generator), (TRY_AGAIN_LABEL, true));
}

/// **VALUE**: Verifies the Loading state refuses a second request.
///
/// **BUG THIS CATCHES**: Would catch the guard being removed, allowing two
/// fetches to race for the same card.
#[tokio::test]
async fn given_request_in_flight_when_generate_called_again_then_returns_busy() {
    let mut generator = ProfileGenerator::new();
    let task = generator.generate(Arc::new(StubSource::Hangs)).unwrap();

    let second = generator.generate(Arc::new(StubSource::Succeeds(jane())));

    assert!(matches!(second, Err(ProfileError::Busy { .. })));
    assert_eq!(generator.status(), ProfileStatus::Loading);
    task.abort();
}

#[tokio::test]
async fn given_hanging_request_when_aborted_then_abandoned_and_previous_status_restored() {
    // GIVEN: A failed attempt followed by a request that never resolves
    let mut generator = ProfileGenerator::new();
    let task = generator.generate(Arc::new(StubSource::Fails)).unwrap();
    generator.finish(task.outcome().await);
    let task = generator.generate(Arc::new(StubSource::Hangs)).unwrap();

    // WHEN: Aborting it
    task.abort();
    let outcome = task.outcome().await;

    // THEN: Abandoned, and the generator returns to Failed
    assert!(matches!(outcome, FetchOutcome::Abandoned));
    assert_eq!(generator.finish(outcome), ProfileStatus::Failed);
    assert_eq!(trigger(&generator), (TRY_AGAIN_LABEL, true));
}

#[test]
fn given_not_loading_when_outcome_arrives_then_discarded() {
    let mut generator = ProfileGenerator::new();

    let status = generator.finish(FetchOutcome::Ready(jane()));

    assert_eq!(status, ProfileStatus::Idle);
    assert!(generator.profile().is_none());
}
