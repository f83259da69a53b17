use widget_core::error::widget::WidgetError;

use common::ErrorLocation;

use std::panic::Location;

#[test]
fn given_unknown_panel_error_when_formatted_then_includes_message_and_location() {
    let err = WidgetError::UnknownPanel {
        message: String::from("Panel 7 does not exist (3 panels)"),
        location: ErrorLocation::from(Location::caller()),
    };

    let text = format!("{}", err);

    assert!(text.contains("Unknown Panel Error"));
    assert!(text.contains("Panel 7 does not exist"));
    assert!(text.contains("widget.rs"));
}
