use crate::HttpStatusCode;

/// **VALUE**: Verifies status classification used when a profile request is rejected.
///
/// **BUG THIS CATCHES**: Off-by-one range bounds (e.g. 500 counted as a client error).
#[test]
fn given_boundary_codes_when_classified_then_land_in_correct_range() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

#[test]
fn given_status_codes_when_categorized_then_returns_label() {
    assert_eq!(HttpStatusCode(204).category(), "success");
    assert_eq!(HttpStatusCode(404).category(), "client error");
    assert_eq!(HttpStatusCode(503).category(), "server error");
    assert_eq!(HttpStatusCode(301).category(), "unexpected status");
}

#[test]
fn given_u16_when_converted_then_displays_bare_number() {
    let status = HttpStatusCode::from(429);

    assert_eq!(status, HttpStatusCode(429));
    assert_eq!(status.to_string(), "429");
}
