// Unit tests for the calculator state machine
// Key sequences are fed through `press` exactly as the keypad would

use crate::calculator::{Calculator, ERROR_MARKER, Key, Operator, Phase, evaluate, format_number};
use crate::error::calculator::CalculatorError;
use crate::error::widget::WidgetError;

fn press_all(calculator: &mut Calculator, labels: &[&str]) {
    for label in labels {
        let key: Key = label.parse().expect("test keys are valid");
        calculator.press(key).expect("test keys are valid");
    }
}

fn run(labels: &[&str]) -> Calculator {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, labels);
    calculator
}

/// **VALUE**: Verifies digits concatenate and a lone leading zero collapses.
///
/// **BUG THIS CATCHES**: Would catch "0" being kept as a prefix ("012") or
/// repeated zeros accumulating ("000").
#[test]
fn given_cleared_calculator_when_digits_entered_then_display_concatenates_without_leading_zero() {
    // GIVEN: A calculator that has been cleared
    let mut calculator = run(&["9", "+", "C"]);
    assert_eq!(calculator.display(), "0");

    // WHEN: Entering 0, 0, 1, 2
    press_all(&mut calculator, &["0", "0", "1", "2"]);

    // THEN: Display shows 12
    assert_eq!(calculator.display(), "12");
    assert_eq!(calculator.phase(), Phase::AccumulatingFirst);
}

#[test]
fn given_cleared_calculator_when_only_zeros_entered_then_display_stays_zero() {
    let calculator = run(&["0", "0", "0"]);

    assert_eq!(calculator.display(), "0");
}

/// **VALUE**: Verifies left-to-right chaining: a second operator evaluates the first.
///
/// **WHY THIS MATTERS**: `2 + 3 ×` must show 5 before the next operand, and 5
/// becomes the first operand of the multiplication. There is no precedence.
///
/// **BUG THIS CATCHES**: Would catch the pending operation being dropped or
/// evaluated with precedence.
#[test]
fn given_pending_addition_when_second_operator_pressed_then_evaluates_and_chains() {
    // GIVEN/WHEN: 2 + 3 ×
    let mut calculator = run(&["2", "+", "3", "×"]);

    // THEN: 5 is displayed and promoted to first operand
    assert_eq!(calculator.display(), "5");
    assert_eq!(calculator.first_operand(), Some(5.0));
    assert_eq!(calculator.pending_operator(), Some(Operator::Multiply));
    assert!(calculator.is_waiting_for_second_operand());

    // AND: Continuing with 4 = gives (2 + 3) × 4
    press_all(&mut calculator, &["4", "="]);
    assert_eq!(calculator.display(), "20");
}

/// **VALUE**: Verifies division by zero shows the error marker instead of a number.
///
/// **BUG THIS CATCHES**: Would catch "inf" or "NaN" leaking onto the display.
#[test]
fn given_division_by_zero_when_equals_pressed_then_displays_error_marker() {
    // GIVEN/WHEN: 5 ÷ 0 =
    let calculator = run(&["5", "÷", "0", "="]);

    // THEN: Error marker, state reset
    assert_eq!(calculator.display(), ERROR_MARKER);
    assert_eq!(calculator.phase(), Phase::Start);
    assert_eq!(calculator.first_operand(), None);
}

#[test]
fn given_error_displayed_when_digit_entered_then_overwrites_error() {
    let mut calculator = run(&["5", "÷", "0", "="]);

    press_all(&mut calculator, &["7"]);

    assert_eq!(calculator.display(), "7");
}

#[test]
fn given_error_displayed_when_operator_pressed_then_ignored() {
    let mut calculator = run(&["5", "÷", "0", "="]);

    press_all(&mut calculator, &["+"]);

    assert_eq!(calculator.display(), ERROR_MARKER);
    assert_eq!(calculator.phase(), Phase::Start);
}

#[test]
fn given_division_by_zero_when_chained_operator_pressed_then_displays_error_marker() {
    let calculator = run(&["5", "÷", "0", "+"]);

    assert_eq!(calculator.display(), ERROR_MARKER);
    assert_eq!(calculator.pending_operator(), None);
}

/// **VALUE**: Pins the repeated-equals behavior: the second `=` does nothing.
///
/// **BUG THIS CATCHES**: Would catch someone adding "repeat last operation"
/// semantics (5 → 8 → 11 for `2 + 3 = = =`).
#[test]
fn given_result_shown_when_equals_pressed_again_then_display_unchanged() {
    // GIVEN: 2 + 3 =
    let mut calculator = run(&["2", "+", "3", "="]);
    assert_eq!(calculator.display(), "5");

    // WHEN: Pressing = twice more
    press_all(&mut calculator, &["=", "="]);

    // THEN: Still 5, no pending operator
    assert_eq!(calculator.display(), "5");
    assert_eq!(calculator.pending_operator(), None);
    assert_eq!(calculator.first_operand(), Some(5.0));
}

#[test]
fn given_result_shown_when_operator_pressed_then_continues_from_result() {
    let calculator = run(&["2", "+", "3", "=", "×", "4", "="]);

    assert_eq!(calculator.display(), "20");
}

/// **VALUE**: Verifies the result of `=` stays the first operand when a new number is typed.
///
/// **WHY THIS MATTERS**: An operator only records the display as the first
/// operand when none is held. A result is held until `C`.
///
/// **BUG THIS CATCHES**: Would catch the typed number replacing the result,
/// which makes `2 + 3 = 7 + 1 =` show 8 instead of 6.
#[test]
fn given_result_shown_when_new_number_typed_then_result_stays_first_operand() {
    // GIVEN: 5 on the display after `=`, then 7 typed
    let mut calculator = run(&["2", "+", "3", "=", "7"]);
    assert_eq!(calculator.display(), "7");
    assert_eq!(calculator.first_operand(), Some(5.0));

    // WHEN: An operator and a second operand follow
    press_all(&mut calculator, &["+"]);
    assert_eq!(calculator.first_operand(), Some(5.0));
    assert_eq!(calculator.pending_operator(), Some(Operator::Add));
    press_all(&mut calculator, &["1", "="]);

    // THEN: Chained from the held result
    assert_eq!(calculator.display(), "6");
    assert_eq!(calculator.first_operand(), Some(6.0));
}

#[test]
fn given_operator_pending_when_another_operator_pressed_then_replaces_it() {
    let calculator = run(&["6", "+", "-", "2", "="]);

    assert_eq!(calculator.display(), "4");
}

#[test]
fn given_operator_pending_when_equals_pressed_then_uses_display_as_second_operand() {
    let calculator = run(&["2", "+", "="]);

    assert_eq!(calculator.display(), "4");
}

#[test]
fn given_equals_without_operator_when_pressed_then_no_op() {
    let calculator = run(&["4", "2", "="]);

    assert_eq!(calculator.display(), "42");
    assert_eq!(calculator.phase(), Phase::AccumulatingFirst);
}

#[test]
fn given_decimal_entries_when_added_then_displays_decimal_sum() {
    let calculator = run(&[".", "5", "+", "0", ".", "2", "5", "="]);

    assert_eq!(calculator.display(), "0.75");
}

#[test]
fn given_decimal_point_when_pressed_twice_then_only_one_is_kept() {
    let calculator = run(&["1", ".", ".", "5"]);

    assert_eq!(calculator.display(), "1.5");
}

#[test]
fn given_native_float_arithmetic_when_adding_tenths_then_shows_full_precision() {
    let calculator = run(&["0", ".", "1", "+", "0", ".", "2", "="]);

    assert_eq!(calculator.display(), "0.30000000000000004");
}

#[test]
fn given_subtraction_when_result_negative_then_displays_sign() {
    let calculator = run(&["3", "-", "5", "="]);

    assert_eq!(calculator.display(), "-2");
}

#[test]
fn given_any_state_when_clear_pressed_then_resets_to_start() {
    let calculator = run(&["7", "×", "8", "C"]);

    assert_eq!(calculator.display(), "0");
    assert_eq!(calculator.phase(), Phase::Start);
    assert_eq!(calculator.pending_operator(), None);
}

#[test]
fn given_button_labels_when_parsed_then_map_to_keys() {
    assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
    assert_eq!(".".parse::<Key>().unwrap(), Key::Decimal);
    assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
    assert_eq!("C".parse::<Key>().unwrap(), Key::Clear);
    assert_eq!("×".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
    assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
    assert_eq!("/".parse::<Key>().unwrap(), Key::Operator(Operator::Divide));
}

#[test]
fn given_unknown_label_when_parsed_then_returns_invalid_key() {
    let result = "42".parse::<Key>();

    assert!(matches!(result, Err(WidgetError::InvalidKey { .. })));
}

#[test]
fn given_out_of_range_digit_when_pressed_then_returns_invalid_key() {
    let mut calculator = Calculator::new();

    let result = calculator.press(Key::Digit(12));

    assert!(matches!(result, Err(WidgetError::InvalidKey { .. })));
    assert_eq!(calculator.display(), "0");
}

#[test]
fn given_divisor_zero_when_evaluated_then_returns_division_by_zero() {
    let result = evaluate(Operator::Divide, 5.0, 0.0);

    match result {
        Err(CalculatorError::DivisionByZero { dividend, .. }) => assert_eq!(dividend, 5.0),
        other => panic!("expected DivisionByZero, got {other:?}"),
    }
}

#[test]
fn given_overflowing_product_when_evaluated_then_returns_non_finite() {
    let result = evaluate(Operator::Multiply, f64::MAX, 2.0);

    assert!(matches!(result, Err(CalculatorError::NonFinite { .. })));
}

#[test]
fn given_negative_zero_when_formatted_then_prints_plain_zero() {
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(4.0), "4");
}

/// **VALUE**: Verifies an entry can never grow past what `f64` can hold.
///
/// **WHY THIS MATTERS**: The display must always read as a finite number or
/// the error marker; an infinite entry would make every later operator and
/// `=` silently do nothing.
///
/// **BUG THIS CATCHES**: Would catch digits being appended without checking
/// that the entry still parses to a finite value.
#[test]
fn given_huge_entry_when_more_digits_typed_then_display_stays_finite() {
    // GIVEN: A 1 followed by 400 nines typed in
    let mut calculator = Calculator::new();
    calculator.input_digit(1).unwrap();
    for _ in 0..400 {
        calculator.input_digit(9).unwrap();
    }

    // THEN: The entry stopped growing while still finite
    let entry = calculator.display().parse::<f64>().unwrap();
    assert!(entry.is_finite(), "display overflowed: {}", calculator.display());
    assert!(calculator.display().len() < 401);

    // AND: The calculator still evaluates
    press_all(&mut calculator, &["×", "0", "="]);
    assert_eq!(calculator.display(), "0");
}
