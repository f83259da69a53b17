// Unit tests for ShowcaseError formatting and conversions

use crate::error::ShowcaseError;

use common::ErrorLocation;
use widget_core::error::CoreError;
use widget_core::error::config::ConfigError;
use widget_core::error::widget::WidgetError;

use std::panic::Location;

/// **VALUE**: Verifies the host error renders kind, message and call site.
#[test]
fn given_command_error_when_displayed_then_includes_kind_message_and_location() {
    // GIVEN: A command error
    let error = ShowcaseError::Command {
        message: String::from("unknown command 'dance'"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Displayed
    let display = error.to_string();

    // THEN: All three parts are present
    assert!(display.starts_with("Command Error: unknown command 'dance'"));
    assert!(display.contains("error.rs:"), "location missing: {display}");
}

/// **VALUE**: Verifies core errors keep their own text when wrapped.
///
/// **WHY THIS MATTERS**: The host only logs the outer error; the widget-core
/// message must survive the conversion.
#[test]
fn given_core_error_when_converted_then_wraps_its_message() {
    // GIVEN: A widget error lifted into CoreError
    let core = CoreError::from(WidgetError::UnknownPanel {
        message: String::from("No FAQ panel at index 9"),
        location: ErrorLocation::from(Location::caller()),
    });

    // WHEN: Converted
    let error = ShowcaseError::from(core);

    // THEN: A Core error carrying the widget-core text
    match error {
        ShowcaseError::Core { message, .. } => {
            assert!(message.contains("No FAQ panel at index 9"), "got: {message}");
        }
        other => panic!("Expected Core error, got {other:?}"),
    }
}

#[test]
fn given_config_error_when_converted_then_becomes_core_error() {
    let config = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("bad version"),
    };

    let error: ShowcaseError = config.into();

    assert!(matches!(error, ShowcaseError::Core { .. }));
    assert!(error.to_string().starts_with("Core Error:"));
}
