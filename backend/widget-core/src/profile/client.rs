use crate::RANDOM_USER_ENDPOINT;
use crate::error::profile::ProfileError;
use crate::profile::ProfileSource;

use common::{ErrorLocation, HttpStatusCode};
use models::{Profile, ProfileBuilder};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct RandomUserEnvelope {
    results: Vec<RandomUser>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    name: RandomUserName,
    email: String,
    picture: RandomUserPicture,
}

#[derive(Debug, Deserialize)]
struct RandomUserName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RandomUserPicture {
    large: String,
}

/// HTTP client for the identity-generation endpoint.
///
/// Sends a bare GET: no query parameters, headers or authentication.
#[derive(Clone)]
pub struct ProfileClient {
    endpoint: Url,
    client: Client,
}

impl ProfileClient {
    pub fn new(endpoint_str: &str, timeout: Duration) -> Result<Self, ProfileError> {
        let endpoint = Url::parse(endpoint_str)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { endpoint, client })
    }

    /// Client for the public endpoint with the default timeout.
    pub fn public() -> Result<Self, ProfileError> {
        Self::new(RANDOM_USER_ENDPOINT, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch one profile from `results[0]`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] on network failure, a non-success status,
    /// a body that does not match the envelope, an empty `results` array,
    /// or a record with blank fields.
    pub async fn fetch_profile(&self) -> Result<Profile, ProfileError> {
        debug!("GET {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            return Err(ProfileError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let json: Value = response.json().await?;
        let envelope: RandomUserEnvelope = serde_json::from_value(json)?;

        let user = envelope
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ProfileError::EmptyResults {
                message: String::from("Response contained no results"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let profile = ProfileBuilder::default()
            .with_first_name(user.name.first)
            .with_last_name(user.name.last)
            .with_email(user.email)
            .with_avatar_url(user.picture.large)
            .build()?;

        Ok(profile)
    }
}

impl ProfileSource for ProfileClient {
    async fn fetch_profile(&self) -> Result<Profile, ProfileError> {
        ProfileClient::fetch_profile(self).await
    }
}
