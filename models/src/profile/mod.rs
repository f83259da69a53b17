pub mod builder;

use serde::{Deserialize, Serialize};

/// A generated identity shown by the profile card.
///
/// Replaced wholesale on every successful fetch; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: String,
}

impl Profile {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
