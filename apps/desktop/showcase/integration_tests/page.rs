// Integration tests for the page actor
// Events go in through PageHandle, assertions read the rendered document

use showcase::dom::{
    CALC_DISPLAY, Document, FAQ_LIST, GENERATE_USER_BUTTON, HAMBURGER, RATING_ERROR,
    SUCCESS_MESSAGE, TASK_COUNTER, TASK_LIST, USER_EMAIL, USER_NAME,
};
use showcase::event::{PageEvent, parse_command};
use showcase::page::{PageHandle, PageSetup, spawn_page};

use common::ErrorLocation;
use models::Profile;
use widget_core::error::profile::ProfileError;
use widget_core::faq::FaqPanel;
use widget_core::profile::{ProfileClient, ProfileSource};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Succeeds on the first call, fails on every later one.
struct FlakySource {
    calls: AtomicUsize,
}

impl FlakySource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl ProfileSource for FlakySource {
    async fn fetch_profile(&self) -> Result<Profile, ProfileError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(Profile {
                first_name: String::from("Jane"),
                last_name: String::from("Doe"),
                email: String::from("jane@example.com"),
                avatar_url: String::from("https://example.com/jane.jpg"),
            })
        } else {
            Err(ProfileError::Http {
                message: String::from("connection reset"),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

struct HangingSource;

impl ProfileSource for HangingSource {
    async fn fetch_profile(&self) -> Result<Profile, ProfileError> {
        std::future::pending().await
    }
}

fn setup() -> PageSetup {
    PageSetup {
        initial_tasks: vec![String::from("water plants")],
        faq_panels: vec![
            FaqPanel::new("First?", "one"),
            FaqPanel::new("Second?", "two"),
            FaqPanel::new("Third?", "three"),
        ],
        success_hide_delay: Duration::from_secs(5),
    }
}

async fn run(page: &PageHandle, lines: &[&str]) -> Document {
    for line in lines {
        for event in parse_command(line).expect("test command parses") {
            page.dispatch(event).await.expect("page is running");
        }
    }
    page.flush().await.expect("page is running");
    page.document().await
}

/// Poll until the trigger leaves `Loading...`.
async fn settled(page: &PageHandle) -> Document {
    tokio::time::timeout(SETTLE_TIMEOUT, async {
        loop {
            page.flush().await.expect("page is running");
            let document = page.document().await;
            if document.text(GENERATE_USER_BUTTON) != Some("Loading...") {
                return document;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("profile request settles")
}

#[tokio::test]
async fn given_new_page_when_rendered_then_initial_state_shown() {
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    let document = run(&page, &[]).await;

    assert_eq!(document.value(CALC_DISPLAY), Some("0"));
    assert_eq!(document.child_texts(TASK_LIST), vec!["water plants"]);
    assert_eq!(document.text(TASK_COUNTER), Some("1"));
    assert_eq!(document.text(GENERATE_USER_BUTTON), Some("Generate User"));
    assert_eq!(document.element(FAQ_LIST).unwrap().children.len(), 3);
}

/// **VALUE**: Verifies chained operators evaluate left to right through the page.
#[tokio::test]
async fn given_calculator_keys_when_dispatched_then_display_follows() {
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    assert_eq!(run(&page, &["calc C 0 0 7"]).await.value(CALC_DISPLAY), Some("7"));
    assert_eq!(run(&page, &["calc C 2 + 3 ×"]).await.value(CALC_DISPLAY), Some("5"));
    assert_eq!(run(&page, &["calc C 5 ÷ 0 ="]).await.value(CALC_DISPLAY), Some("Error"));
}

/// **VALUE**: Verifies blank tasks are ignored and deletes keep the others' order.
#[tokio::test]
async fn given_task_commands_when_dispatched_then_list_and_counter_follow() {
    // GIVEN: A page seeded with one task
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    // WHEN: A blank add, then two real adds, one via Enter
    let document = run(
        &page,
        &["task input    ", "task add", "task add buy milk", "task input call mum", "task enter"],
    )
    .await;

    // THEN: Blank ignored, the rest appended in order
    assert_eq!(
        document.child_texts(TASK_LIST),
        vec!["water plants", "buy milk", "call mum"]
    );
    assert_eq!(document.text(TASK_COUNTER), Some("3"));

    // WHEN: Deleting the middle one
    let document = run(&page, &["task delete 2"]).await;

    // THEN: Order of the others preserved
    assert_eq!(document.child_texts(TASK_LIST), vec!["water plants", "call mum"]);
    assert_eq!(document.text(TASK_COUNTER), Some("2"));
}

/// **VALUE**: Verifies widget errors are logged and the page keeps running.
///
/// **BUG THIS CATCHES**: Would catch the actor loop exiting on an
/// out-of-range panel or position.
#[tokio::test]
async fn given_bad_events_when_dispatched_then_page_survives() {
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    run(&page, &["faq 9", "task delete 5", "rate 9"]).await;
    let document = run(&page, &["nav"]).await;

    assert!(!page.is_closed());
    assert!(document.has_class(HAMBURGER, "active"));
}

/// **VALUE**: Verifies the accordion keeps at most one panel open.
#[tokio::test]
async fn given_open_panel_when_another_toggled_then_only_second_open() {
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    let open = |document: &Document| -> Vec<bool> {
        document
            .element(FAQ_LIST)
            .unwrap()
            .children
            .iter()
            .map(|item| item.has_class("active"))
            .collect()
    };

    assert_eq!(open(&run(&page, &["faq 1"]).await), vec![true, false, false]);
    assert_eq!(open(&run(&page, &["faq 2"]).await), vec![false, true, false]);
    assert_eq!(open(&run(&page, &["faq 2"]).await), vec![false, false, false]);
}

/// **VALUE**: Verifies the success indicator hides itself after the configured delay.
///
/// **WHY THIS MATTERS**: The timer runs outside the actor and re-enters as an
/// event; a lost event would leave the message up forever.
///
/// **BUG THIS CATCHES**: Would catch the timer never being scheduled, or the
/// actor holding a strong sender that the timer outlives.
#[tokio::test(start_paused = true)]
async fn given_valid_submit_when_delay_elapses_then_success_hidden() {
    // GIVEN: A valid submission
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));
    let document = run(
        &page,
        &["name Ada", "email ada@example.com", "message Lovely page", "rate 4", "submit"],
    )
    .await;
    assert!(document.is_visible(SUCCESS_MESSAGE));
    assert_eq!(document.value("#name"), Some(""));
    assert_eq!(document.value("#rating"), Some("0"));

    // WHEN: Four seconds pass
    tokio::time::sleep(Duration::from_secs(4)).await;

    // THEN: Still visible
    assert!(run(&page, &[]).await.is_visible(SUCCESS_MESSAGE));

    // WHEN: The fifth second passes
    tokio::time::sleep(Duration::from_millis(1001)).await;

    // THEN: Hidden
    assert!(!run(&page, &[]).await.is_visible(SUCCESS_MESSAGE));
}

#[tokio::test]
async fn given_missing_rating_when_submitted_then_rating_error_and_no_success() {
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));

    let document = run(
        &page,
        &["name Ada", "email ada@example.com", "message Lovely page", "submit"],
    )
    .await;

    assert!(document.is_visible(RATING_ERROR));
    assert!(!document.is_visible(SUCCESS_MESSAGE));
    assert_eq!(document.value("#name"), Some("Ada"));
}

/// **VALUE**: Verifies a failed fetch keeps the previous card and offers a retry.
///
/// **BUG THIS CATCHES**: Would catch a failure blanking the card, or the
/// trigger staying disabled after the error.
#[tokio::test]
async fn given_shown_profile_when_next_fetch_fails_then_card_kept_and_try_again() {
    // GIVEN: A first successful fetch
    let page = spawn_page(setup(), Arc::new(FlakySource::new()));
    run(&page, &["profile"]).await;
    let document = settled(&page).await;
    assert_eq!(document.text(GENERATE_USER_BUTTON), Some("Generate New User"));
    assert_eq!(document.text(USER_NAME), Some("Jane Doe"));

    // WHEN: The next fetch fails
    run(&page, &["profile"]).await;
    let document = settled(&page).await;

    // THEN: Retry offered, card untouched
    let button = document.element(GENERATE_USER_BUTTON).unwrap();
    assert_eq!(button.text, "Try Again");
    assert!(button.attr("disabled").is_none());
    assert_eq!(document.text(USER_NAME), Some("Jane Doe"));
    assert_eq!(document.text(USER_EMAIL), Some("jane@example.com"));
}

/// **VALUE**: Verifies a second generate while loading is refused, not queued.
#[tokio::test]
async fn given_loading_profile_when_generated_again_then_still_one_request() {
    let page = spawn_page(setup(), Arc::new(HangingSource));

    let document = run(&page, &["profile", "profile"]).await;

    let button = document.element(GENERATE_USER_BUTTON).unwrap();
    assert_eq!(button.text, "Loading...");
    assert!(button.attr("disabled").is_some());
}

/// **VALUE**: Verifies unmounting abandons the request and restores the last settled label.
#[tokio::test]
async fn given_loading_profile_when_unmounted_then_request_abandoned() {
    // GIVEN: A request that never resolves
    let page = spawn_page(setup(), Arc::new(HangingSource));
    run(&page, &["profile"]).await;

    // WHEN: The page goes away
    page.unmount().await.unwrap();
    tokio::time::timeout(SETTLE_TIMEOUT, async {
        while !page.is_closed() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("actor stops after unmount");

    // THEN: Back to the idle label, and further events are refused
    let document = page.document().await;
    assert_eq!(document.text(GENERATE_USER_BUTTON), Some("Generate User"));
    assert!(page.dispatch(PageEvent::NavToggle).await.is_err());
}

/// **VALUE**: Verifies the real client plugged into the page end to end.
#[tokio::test]
async fn given_random_user_endpoint_when_generated_then_card_rendered() {
    // GIVEN: A mock endpoint
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": { "title": "Mr", "first": "Ola", "last": "Nordmann" },
                "email": "ola.nordmann@example.com",
                "picture": { "large": "https://randomuser.me/api/portraits/men/3.jpg" }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = ProfileClient::new(&format!("{}/api/", server.uri()), SETTLE_TIMEOUT).unwrap();
    let page = spawn_page(setup(), Arc::new(client));

    // WHEN: Generating
    run(&page, &["profile"]).await;
    let document = settled(&page).await;

    // THEN: The card shows the first result
    assert_eq!(document.text(USER_NAME), Some("Ola Nordmann"));
    assert_eq!(document.text(USER_EMAIL), Some("ola.nordmann@example.com"));
    assert_eq!(document.text(GENERATE_USER_BUTTON), Some("Generate New User"));
}
