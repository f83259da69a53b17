use widget_core::profile::generator::TRY_AGAIN_LABEL;
use widget_core::profile::{ProfileClient, ProfileGenerator, ProfileStatus};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End to end: a real HTTP failure leaves the previous profile and re-enables the trigger.
#[tokio::test]
async fn given_shown_profile_when_endpoint_starts_failing_then_previous_profile_kept() {
    // GIVEN: A first successful generation
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "name": { "first": "Ada", "last": "Lovelace" },
                "email": "ada@example.com",
                "picture": { "large": "https://example.com/ada.jpg" }
            }]
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = Arc::new(
        ProfileClient::new(&format!("{}/api/", server.uri()), Duration::from_secs(5)).unwrap(),
    );
    let mut generator = ProfileGenerator::new();
    let task = generator.generate(Arc::clone(&client)).unwrap();
    assert_eq!(generator.finish(task.outcome().await), ProfileStatus::Ready);

    // WHEN: The second generation hits a 500
    let task = generator.generate(Arc::clone(&client)).unwrap();
    let status = generator.finish(task.outcome().await);

    // THEN: Failed, Ada still shown, retry offered
    assert_eq!(status, ProfileStatus::Failed);
    assert_eq!(
        generator.profile().map(|profile| profile.full_name()),
        Some(String::from("Ada Lovelace"))
    );
    assert_eq!(status.trigger_label(), TRY_AGAIN_LABEL);
    assert!(status.trigger_enabled());
}
