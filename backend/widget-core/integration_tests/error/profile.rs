use widget_core::error::CoreError;
use widget_core::error::profile::ProfileError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

/// **VALUE**: Verifies server errors show status, category and call site.
///
/// **WHY THIS MATTERS**: Profile failures are only visible in the log. The log
/// line is the sole diagnostic, so it must say what came back and from where.
///
/// **BUG THIS CATCHES**: Would catch the location or status being dropped from
/// the Display format.
#[test]
fn given_server_error_when_formatted_then_includes_status_and_location() {
    // GIVEN: A Server error
    let err = ProfileError::Server {
        status: HttpStatusCode(502),
        message: String::from("bad gateway"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let text = err.to_string();

    // THEN: Status, category, message and file are present
    assert!(text.contains("Server Error"));
    assert!(text.contains("HTTP 502"));
    assert!(text.contains("server error"));
    assert!(text.contains("bad gateway"));
    assert!(text.contains("profile.rs"));
}

#[test]
fn given_url_parse_failure_when_converted_then_becomes_url_parse_variant() {
    let parse_error = url::Url::parse("::").unwrap_err();

    let err = ProfileError::from(parse_error);

    assert!(matches!(err, ProfileError::UrlParse { .. }));
}

#[test]
fn given_profile_error_when_wrapped_in_core_error_then_message_is_transparent() {
    let err = ProfileError::Busy {
        message: String::from("in flight"),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = err.to_string();

    let core: CoreError = err.into();

    assert_eq!(core.to_string(), expected);
}
