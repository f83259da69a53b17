use crate::{ModelError, ProfileBuilder};

fn complete_builder() -> ProfileBuilder {
    ProfileBuilder::default()
        .with_first_name("Jane")
        .with_last_name("Doe")
        .with_email("jane@example.com")
        .with_avatar_url("https://randomuser.me/api/portraits/women/1.jpg")
}

/// **VALUE**: Verifies the happy path produces a Profile with every field intact.
///
/// **BUG THIS CATCHES**: Would catch fields being swapped or dropped by the builder.
#[test]
fn given_all_fields_when_building_profile_then_succeeds() {
    // GIVEN: A builder with every field populated
    let builder = complete_builder();

    // WHEN: Building
    let profile = builder.build().expect("complete builder should build");

    // THEN: Every field is carried through
    assert_eq!(profile.first_name, "Jane");
    assert_eq!(profile.last_name, "Doe");
    assert_eq!(profile.email, "jane@example.com");
    assert_eq!(
        profile.avatar_url,
        "https://randomuser.me/api/portraits/women/1.jpg"
    );
}

/// **VALUE**: Verifies that a response missing the email cannot become a Profile.
///
/// **WHY THIS MATTERS**: A failed fetch must not render partial state. Rejecting
/// incomplete data here keeps the previous card on screen.
///
/// **BUG THIS CATCHES**: Would catch if required-field checks are removed.
#[test]
fn given_missing_email_when_building_then_returns_validation_error() {
    // GIVEN: Builder without email
    let builder = ProfileBuilder::default()
        .with_first_name("Jane")
        .with_last_name("Doe")
        .with_avatar_url("https://example.com/a.jpg");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the field
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Email is required");
        }
    }
}

#[test]
fn given_blank_first_name_when_building_then_returns_validation_error() {
    let result = complete_builder().with_first_name("   ").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "First name cannot be empty");
        }
    }
}

/// **VALUE**: Verifies that only http(s) avatar URLs are accepted.
///
/// **BUG THIS CATCHES**: Would catch if scheme checking is removed and a
/// `javascript:` or relative URL reached the image element.
#[test]
fn given_non_http_avatar_when_building_then_returns_validation_error() {
    let result = complete_builder().with_avatar_url("ftp://example.com/a.jpg").build();

    let err = result.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Invalid avatar URL format"));
    assert!(message.contains("ftp://example.com/a.jpg"));
}
