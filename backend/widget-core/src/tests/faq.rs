use crate::error::widget::WidgetError;
use crate::faq::{FaqAccordion, FaqPanel};
use crate::render::{Widget, WidgetView};

fn accordion() -> FaqAccordion {
    FaqAccordion::new(vec![
        FaqPanel::new("A?", "a"),
        FaqPanel::new("B?", "b"),
        FaqPanel::new("C?", "c"),
    ])
}

/// **VALUE**: Verifies opening B while A is open leaves only B open.
///
/// **BUG THIS CATCHES**: Would catch the "close all" step being skipped, which
/// would leave two panels expanded.
#[test]
fn given_panel_a_open_when_panel_b_toggled_then_only_b_open() {
    // GIVEN: Panel A open
    let mut faq = accordion();
    faq.toggle(0).unwrap();

    // WHEN: Toggling B
    faq.toggle(1).unwrap();

    // THEN: Only B open
    assert!(!faq.is_open(0));
    assert!(faq.is_open(1));
    assert_eq!(faq.open_panel(), Some(1));
}

#[test]
fn given_open_panel_when_toggled_again_then_all_closed() {
    let mut faq = accordion();
    faq.toggle(2).unwrap();

    faq.toggle(2).unwrap();

    assert_eq!(faq.open_panel(), None);
}

#[test]
fn given_out_of_range_panel_when_toggled_then_returns_unknown_panel() {
    let mut faq = accordion();
    faq.toggle(0).unwrap();

    let result = faq.toggle(3);

    assert!(matches!(result, Err(WidgetError::UnknownPanel { .. })));
    assert_eq!(faq.open_panel(), Some(0), "state untouched on error");
}

#[test]
fn given_any_toggle_sequence_when_viewed_then_at_most_one_panel_open() {
    let mut faq = accordion();

    for index in [0, 1, 1, 2, 0, 0, 2] {
        faq.toggle(index).unwrap();

        let WidgetView::Faq(view) = faq.view() else {
            panic!("accordion renders a FAQ view");
        };
        assert!(view.panels.iter().filter(|panel| panel.is_open).count() <= 1);
    }
}
