mod builder;

use crate::Profile;

#[test]
fn given_profile_when_full_name_requested_then_joins_with_single_space() {
    let profile = Profile {
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        email: String::from("jane@example.com"),
        avatar_url: String::from("https://example.com/jane.jpg"),
    };

    assert_eq!(profile.full_name(), "Jane Doe");
}
