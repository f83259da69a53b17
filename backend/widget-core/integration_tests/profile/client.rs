use widget_core::error::profile::ProfileError;
use widget_core::profile::ProfileClient;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn random_user(first: &str, last: &str, email: &str, picture: &str) -> serde_json::Value {
    json!({
        "gender": "female",
        "name": { "title": "Ms", "first": first, "last": last },
        "email": email,
        "picture": {
            "large": picture,
            "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
        },
        "nat": "GB"
    })
}

async fn serve(template: ResponseTemplate) -> (MockServer, ProfileClient) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(template)
        .mount(&server)
        .await;

    let client = ProfileClient::new(&format!("{}/api/", server.uri()), TEST_TIMEOUT)
        .expect("mock server URI is valid");
    (server, client)
}

/// **VALUE**: Verifies the envelope is unpacked into first, last, email and large picture.
///
/// **WHY THIS MATTERS**: The endpoint returns many more fields than the card uses.
/// Only the four rendered fields may be extracted, from the first result.
///
/// **BUG THIS CATCHES**: Would catch the medium/thumbnail picture being used, or
/// a later result winning over `results[0]`.
#[tokio::test]
async fn given_valid_envelope_when_fetched_then_extracts_first_result() {
    // GIVEN: Two results, the first of which should be used
    let body = json!({
        "results": [
            random_user("Jane", "Doe", "jane.doe@example.com", "https://randomuser.me/api/portraits/women/1.jpg"),
            random_user("John", "Roe", "john.roe@example.com", "https://randomuser.me/api/portraits/men/2.jpg"),
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    });
    let (_server, client) = serve(ResponseTemplate::new(200).set_body_json(body)).await;

    // WHEN: Fetching
    let profile = client.fetch_profile().await.expect("fetch succeeds");

    // THEN: First result's fields, large picture
    assert_eq!(profile.first_name, "Jane");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.full_name(), "Jane Doe");
    assert_eq!(profile.email, "jane.doe@example.com");
    assert_eq!(
        profile.avatar_url,
        "https://randomuser.me/api/portraits/women/1.jpg"
    );
}

/// **VALUE**: Verifies the request is a bare GET with no query string.
#[tokio::test]
async fn given_fetch_when_request_sent_then_has_no_query_parameters() {
    let body = json!({ "results": [random_user("A", "B", "a@b.co", "https://x.io/a.jpg")] });
    let (server, client) = serve(ResponseTemplate::new(200).set_body_json(body)).await;

    client.fetch_profile().await.expect("fetch succeeds");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn given_server_error_when_fetched_then_returns_server_error_with_status() {
    let (_server, client) =
        serve(ResponseTemplate::new(503).set_body_string("service unavailable")).await;

    let result = client.fetch_profile().await;

    match result {
        Err(ProfileError::Server {
            status, message, ..
        }) => {
            assert_eq!(status.0, 503);
            assert!(status.is_server_error());
            assert_eq!(message, "service unavailable");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_non_json_body_when_fetched_then_returns_http_decode_error() {
    let (_server, client) = serve(ResponseTemplate::new(200).set_body_string("<html>")).await;

    let result = client.fetch_profile().await;

    assert!(matches!(result, Err(ProfileError::Http { .. })));
}

#[tokio::test]
async fn given_wrong_shape_when_fetched_then_returns_json_error() {
    let (_server, client) =
        serve(ResponseTemplate::new(200).set_body_json(json!({ "results": "nope" }))).await;

    let result = client.fetch_profile().await;

    assert!(matches!(result, Err(ProfileError::Json { .. })));
}

/// **VALUE**: Verifies an empty results array is a failure, not a panic.
///
/// **BUG THIS CATCHES**: Would catch `results[0]` style indexing that panics
/// on an empty array.
#[tokio::test]
async fn given_empty_results_when_fetched_then_returns_empty_results_error() {
    let (_server, client) =
        serve(ResponseTemplate::new(200).set_body_json(json!({ "results": [] }))).await;

    let result = client.fetch_profile().await;

    assert!(matches!(result, Err(ProfileError::EmptyResults { .. })));
}

#[tokio::test]
async fn given_blank_name_when_fetched_then_returns_invalid_profile() {
    let body = json!({ "results": [random_user("", "Doe", "jane@example.com", "https://x.io/a.jpg")] });
    let (_server, client) = serve(ResponseTemplate::new(200).set_body_json(body)).await;

    let result = client.fetch_profile().await;

    match result {
        Err(ProfileError::InvalidProfile { message, .. }) => {
            assert!(message.contains("First name cannot be empty"));
        }
        other => panic!("expected InvalidProfile, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unreachable_endpoint_when_fetched_then_returns_http_error() {
    let client = ProfileClient::new("http://127.0.0.1:65534/api/", TEST_TIMEOUT)
        .expect("URL is valid");

    let result = client.fetch_profile().await;

    assert!(matches!(result, Err(ProfileError::Http { .. })));
}

#[test]
fn given_malformed_endpoint_when_client_created_then_returns_url_parse_error() {
    let result = ProfileClient::new("not a url", TEST_TIMEOUT);

    assert!(matches!(result, Err(ProfileError::UrlParse { .. })));
}

#[test]
fn given_public_client_when_created_then_targets_randomuser_api() {
    let client = ProfileClient::public().expect("built-in endpoint is valid");

    assert_eq!(client.endpoint().as_str(), "https://randomuser.me/api/");
}
