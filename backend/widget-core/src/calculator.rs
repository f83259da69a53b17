//! Four-phase arithmetic accumulator.
//!
//! Evaluation is strictly left to right: pressing a second operator
//! evaluates the pending one first and chains the result. There is no
//! precedence and no repeat-last-operation on `=`.

use crate::error::calculator::CalculatorError;
use crate::error::widget::WidgetError;
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use log::{debug, trace};

/// Display value shown when an evaluation fails.
pub const ERROR_MARKER: &str = "Error";

const INITIAL_DISPLAY: &str = "0";
const DECIMAL_POINT: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Accepts the keypad symbols plus their ASCII spellings.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '×' | '*' | 'x' => Some(Operator::Multiply),
            '÷' | '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl Display for Operator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.symbol())
    }
}

/// Apply `op` to `first` and `second`.
///
/// # Errors
///
/// Returns [`CalculatorError::DivisionByZero`] for `÷ 0` and
/// [`CalculatorError::NonFinite`] when the result overflows.
#[track_caller]
pub fn evaluate(op: Operator, first: f64, second: f64) -> Result<f64, CalculatorError> {
    let result = match op {
        Operator::Add => first + second,
        Operator::Subtract => first - second,
        Operator::Multiply => first * second,
        Operator::Divide => {
            if second == 0.0 {
                return Err(CalculatorError::DivisionByZero {
                    dividend: first,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            first / second
        }
    };

    if !result.is_finite() {
        return Err(CalculatorError::NonFinite {
            message: format!("{first} {op} {second} = {result}"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(result)
}

/// Where the calculator is in an entry.
///
/// `pending` is `None` only after `=`: the result is kept as the first
/// operand so a following operator can continue from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Nothing entered yet, or an evaluation just failed.
    Start,
    AccumulatingFirst,
    WaitingForSecond {
        first: f64,
        pending: Option<Operator>,
    },
    AccumulatingSecond {
        first: f64,
        pending: Option<Operator>,
    },
}

/// A single keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
}

impl FromStr for Key {
    type Err = WidgetError;

    /// Parses a button label: `0`-`9`, `.`, an operator, `=` or `C`.
    #[track_caller]
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let mut chars = label.trim().chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Some(Key::Digit(c as u8 - b'0')),
            (Some(DECIMAL_POINT), None) => Some(Key::Decimal),
            (Some('='), None) => Some(Key::Equals),
            (Some('C') | Some('c'), None) => Some(Key::Clear),
            (Some(c), None) => Operator::from_symbol(c).map(Key::Operator),
            _ => None,
        };

        key.ok_or_else(|| WidgetError::InvalidKey {
            message: format!("'{label}' is not a calculator key"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorView {
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct Calculator {
    phase: Phase,
    display: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Start,
            display: String::from(INITIAL_DISPLAY),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn first_operand(&self) -> Option<f64> {
        match self.phase {
            Phase::WaitingForSecond { first, .. } | Phase::AccumulatingSecond { first, .. } => {
                Some(first)
            }
            Phase::Start | Phase::AccumulatingFirst => None,
        }
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        match self.phase {
            Phase::WaitingForSecond { pending, .. } | Phase::AccumulatingSecond { pending, .. } => {
                pending
            }
            Phase::Start | Phase::AccumulatingFirst => None,
        }
    }

    /// True right after an operator or `=`, before any digit.
    pub fn is_waiting_for_second_operand(&self) -> bool {
        matches!(self.phase, Phase::WaitingForSecond { .. })
    }

    /// Transition function: apply one key press.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidKey`] for a digit above 9.
    #[track_caller]
    pub fn press(&mut self, key: Key) -> Result<(), WidgetError> {
        match key {
            Key::Digit(digit) => self.input_digit(digit)?,
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.handle_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
        trace!("Calculator {:?} -> display {}", self.phase, self.display);
        Ok(())
    }

    #[track_caller]
    pub fn input_digit(&mut self, digit: u8) -> Result<(), WidgetError> {
        let Some(digit) = char::from_digit(u32::from(digit), 10) else {
            return Err(WidgetError::InvalidKey {
                message: format!("{digit} is not a decimal digit"),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        if self.starts_fresh_entry() {
            self.display = digit.to_string();
            self.begin_entry();
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.to_string();
        } else {
            let mut entry = self.display.clone();
            entry.push(digit);
            if !entry.parse::<f64>().is_ok_and(f64::is_finite) {
                debug!("Ignoring digit {digit}: entry would overflow");
                return Ok(());
            }
            self.display = entry;
        }
        Ok(())
    }

    pub fn input_decimal(&mut self) {
        if self.starts_fresh_entry() {
            self.display = format!("{INITIAL_DISPLAY}{DECIMAL_POINT}");
            self.begin_entry();
        } else if !self.display.contains(DECIMAL_POINT) {
            self.display.push(DECIMAL_POINT);
        }
    }

    pub fn handle_operator(&mut self, op: Operator) {
        let Some(input) = self.input_value() else {
            debug!("Ignoring operator {op} while display shows {}", self.display);
            return;
        };

        let phase = self.phase;
        self.phase = match phase {
            Phase::Start | Phase::AccumulatingFirst => Phase::WaitingForSecond {
                first: input,
                pending: Some(op),
            },
            // Pressing another operator before the second operand only swaps it.
            // After `=` the result stays the first operand, even if a new
            // number was typed since.
            Phase::WaitingForSecond { first, .. }
            | Phase::AccumulatingSecond {
                first,
                pending: None,
            } => Phase::WaitingForSecond {
                first,
                pending: Some(op),
            },
            Phase::AccumulatingSecond {
                first,
                pending: Some(pending),
            } => match self.apply(pending, first, input) {
                Some(result) => Phase::WaitingForSecond {
                    first: result,
                    pending: Some(op),
                },
                None => Phase::Start,
            },
        };
    }

    /// Evaluate the pending operation, if any. A second `=` does nothing.
    pub fn equals(&mut self) {
        let (first, pending) = match self.phase {
            Phase::WaitingForSecond {
                first,
                pending: Some(pending),
            }
            | Phase::AccumulatingSecond {
                first,
                pending: Some(pending),
            } => (first, pending),
            _ => return,
        };

        let Some(input) = self.input_value() else {
            return;
        };

        self.phase = match self.apply(pending, first, input) {
            Some(result) => Phase::WaitingForSecond {
                first: result,
                pending: None,
            },
            None => Phase::Start,
        };
    }

    pub fn clear(&mut self) {
        self.phase = Phase::Start;
        self.display = String::from(INITIAL_DISPLAY);
    }

    fn starts_fresh_entry(&self) -> bool {
        matches!(self.phase, Phase::Start | Phase::WaitingForSecond { .. })
    }

    fn begin_entry(&mut self) {
        self.phase = match self.phase {
            Phase::Start => Phase::AccumulatingFirst,
            Phase::WaitingForSecond { first, pending } => {
                Phase::AccumulatingSecond { first, pending }
            }
            other => other,
        };
    }

    fn input_value(&self) -> Option<f64> {
        self.display
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Evaluate and write the outcome to the display.
    fn apply(&mut self, op: Operator, first: f64, second: f64) -> Option<f64> {
        match evaluate(op, first, second) {
            Ok(result) => {
                self.display = format_number(result);
                Some(result)
            }
            Err(e) => {
                debug!("Calculator evaluation failed: {e}");
                self.display = String::from(ERROR_MARKER);
                None
            }
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Calculator {
    fn view(&self) -> WidgetView {
        WidgetView::Calculator(CalculatorView {
            display: self.display.clone(),
        })
    }
}

/// Shortest round-trip decimal form; negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        String::from(INITIAL_DISPLAY)
    } else {
        value.to_string()
    }
}
