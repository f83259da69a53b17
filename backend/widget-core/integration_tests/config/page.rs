use widget_core::RANDOM_USER_ENDPOINT;
use widget_core::config::PageConfig;
use widget_core::error::config::ConfigError;

use std::time::Duration;

use tempfile::TempDir;

#[test]
fn given_missing_config_file_when_loaded_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = PageConfig::load(dir.path()).expect("missing file means defaults");

    assert_eq!(config.version, 1);
    assert_eq!(config.profile.endpoint, RANDOM_USER_ENDPOINT);
    assert_eq!(config.feedback.success_hide_delay(), Duration::from_secs(5));
    assert!(config.tasks.initial.is_empty());
}

/// **VALUE**: Verifies save writes atomically and load reads back what was saved.
#[test]
fn given_saved_config_when_loaded_then_values_match_and_no_temp_file_left() {
    // GIVEN: A customized config saved to a nested, not yet existing directory
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("nested").join("showcase");
    let mut config = PageConfig::default();
    config.profile.timeout_secs = 3;
    config.feedback.success_hide_secs = 2;
    config.tasks.initial = vec![String::from("water plants")];

    // WHEN: Saving then loading
    config.save(&config_dir).expect("save succeeds");
    let loaded = PageConfig::load(&config_dir).expect("load succeeds");

    // THEN: Values survive, temp file is gone
    assert_eq!(loaded.profile.timeout(), Duration::from_secs(3));
    assert_eq!(loaded.feedback.success_hide_secs, 2);
    assert_eq!(loaded.tasks.initial, vec![String::from("water plants")]);
    assert!(!config_dir.join("config.json.tmp").exists());
}

#[test]
fn given_partial_config_when_loaded_then_missing_sections_use_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "tasks": { "initial": ["a", "b"] } }"#,
    )
    .unwrap();

    let config = PageConfig::load(dir.path()).unwrap();

    assert_eq!(config.tasks.initial.len(), 2);
    assert_eq!(config.profile.timeout_secs, 10);
    assert_eq!(config.feedback.success_hide_secs, 5);
}

/// **VALUE**: Verifies a corrupt file is reported rather than silently replaced.
#[test]
fn given_corrupt_json_when_loaded_then_returns_parse_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    let result = PageConfig::load(dir.path());

    match result {
        Err(ConfigError::ParseError { path, .. }) => {
            assert!(path.ends_with("config.json"));
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn given_non_http_endpoint_when_validated_then_returns_validation_error() {
    let mut config = PageConfig::default();
    config.profile.endpoint = String::from("ftp://randomuser.me/api/");

    let result = config.validate();

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn given_zero_timeout_when_saved_then_rejected_before_writing() {
    let dir = TempDir::new().unwrap();
    let mut config = PageConfig::default();
    config.profile.timeout_secs = 0;

    let result = config.save(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn given_future_version_when_loaded_then_returns_validation_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "version": 9 }"#).unwrap();

    let result = PageConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
