use crate::error::model_error::ModelError;
use crate::{ErrorLocation, Profile};

use std::panic::Location;

/// Builder for creating validated Profile instances.
///
/// Every field is required. Names and email must be non-blank and the
/// avatar must be an http(s) URL, so a half-parsed response can never
/// reach the profile card.
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
}

impl ProfileBuilder {
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Build the Profile with validation.
    #[track_caller]
    pub fn build(self) -> Result<Profile, ModelError> {
        let first_name = required(self.first_name, "First name")?;
        let last_name = required(self.last_name, "Last name")?;
        let email = required(self.email, "Email")?;
        let avatar_url = required(self.avatar_url, "Avatar URL")?;

        if !avatar_url.starts_with("http://") && !avatar_url.starts_with("https://") {
            return Err(ModelError::Validation {
                message: format!("Invalid avatar URL format: {avatar_url}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Profile {
            first_name,
            last_name,
            email,
            avatar_url,
        })
    }
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> Result<String, ModelError> {
    let value = value.ok_or_else(|| ModelError::Validation {
        message: format!("{field} is required"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if value.trim().is_empty() {
        return Err(ModelError::Validation {
            message: format!("{field} cannot be empty"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value)
}
