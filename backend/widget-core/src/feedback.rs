//! Feedback form with star rating and submit-time validation.
//!
//! Validity is never stored: [`FeedbackForm::validate`] recomputes all
//! four checks from the current field values and updates which inline
//! errors are visible.

use crate::error::widget::WidgetError;
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;

use std::panic::Location;
use std::sync::OnceLock;
use std::time::Duration;

use log::{debug, info};
use regex::Regex;

pub const MAX_RATING: u8 = 5;
pub const DEFAULT_SUCCESS_HIDE_DELAY: Duration = Duration::from_secs(5);

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex pattern"))
}

/// `local@domain.tld`: one `@`, a dot after it, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    get_email_regex().is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Name,
    Email,
    Message,
}

/// Per-field outcome of one validation pass. `true` means the field passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub name: bool,
    pub email: bool,
    pub rating: bool,
    pub message: bool,
}

impl Validation {
    pub fn check(name: &str, email: &str, rating: u8, message: &str) -> Self {
        Self {
            name: !name.trim().is_empty(),
            email: is_valid_email(email),
            rating: rating > 0,
            message: !message.trim().is_empty(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name && self.email && self.rating && self.message
    }
}

/// Which inline error messages are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub email: bool,
    pub rating: bool,
    pub message: bool,
}

impl From<Validation> for FieldErrors {
    fn from(validation: Validation) -> Self {
        Self {
            name: !validation.name,
            email: !validation.email,
            rating: !validation.rating,
            message: !validation.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields left as entered; the failing checks are shown.
    Rejected(Validation),
    /// Form cleared and success shown; the host should hide it after `hide_after`.
    Accepted { hide_after: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub rating: u8,
    pub stars: [bool; MAX_RATING as usize],
    pub errors: FieldErrors,
    pub success_visible: bool,
}

#[derive(Debug, Clone)]
pub struct FeedbackForm {
    name: String,
    email: String,
    message: String,
    rating: u8,
    errors: FieldErrors,
    success_visible: bool,
    success_hide_delay: Duration,
}

impl FeedbackForm {
    pub fn new(success_hide_delay: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            rating: 0,
            errors: FieldErrors::default(),
            success_visible: false,
            success_hide_delay,
        }
    }

    pub fn set_field(&mut self, field: FeedbackField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FeedbackField::Name => self.name = value,
            FeedbackField::Email => self.email = value,
            FeedbackField::Message => self.message = value,
        }
    }

    pub fn field(&self, field: FeedbackField) -> &str {
        match field {
            FeedbackField::Name => &self.name,
            FeedbackField::Email => &self.email,
            FeedbackField::Message => &self.message,
        }
    }

    /// Click on star `value`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::RatingOutOfRange`] unless `1 <= value <= 5`.
    #[track_caller]
    pub fn set_rating(&mut self, value: u8) -> Result<(), WidgetError> {
        if !(1..=MAX_RATING).contains(&value) {
            return Err(WidgetError::RatingOutOfRange {
                message: format!("Rating must be between 1 and {MAX_RATING}, got {value}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.rating = value;
        Ok(())
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Star `i` (0-based) is active when its position is within the rating.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        std::array::from_fn(|index| index < usize::from(self.rating))
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Run all four checks and show or hide each inline error.
    pub fn validate(&mut self) -> Validation {
        let validation = Validation::check(&self.name, &self.email, self.rating, &self.message);
        self.errors = FieldErrors::from(validation);
        validation
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let validation = self.validate();
        if !validation.is_valid() {
            debug!("Feedback rejected: {:?}", self.errors);
            return SubmitOutcome::Rejected(validation);
        }

        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.rating = 0;
        self.success_visible = true;
        info!("Feedback accepted");

        SubmitOutcome::Accepted {
            hide_after: self.success_hide_delay,
        }
    }

    /// Timer callback. Hiding an already hidden indicator is harmless.
    pub fn hide_success(&mut self) {
        self.success_visible = false;
    }
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new(DEFAULT_SUCCESS_HIDE_DELAY)
    }
}

impl Widget for FeedbackForm {
    fn view(&self) -> WidgetView {
        WidgetView::Feedback(FeedbackView {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            rating: self.rating,
            stars: self.stars(),
            errors: self.errors,
            success_visible: self.success_visible,
        })
    }
}
