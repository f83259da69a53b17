use crate::error::config::ConfigError;
use crate::faq::FaqPanel;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const FAQ_FILE_NAME: &str = "faq.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqConfig {
    #[serde(default)]
    pub panels: Vec<FaqPanel>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            panels: vec![
                FaqPanel::new(
                    "What is this page?",
                    "A handful of small interactive widgets running side by side.",
                ),
                FaqPanel::new(
                    "Where do the generated profiles come from?",
                    "From the public randomuser.me API. Nothing is stored.",
                ),
                FaqPanel::new(
                    "Is my feedback saved?",
                    "No. The form is validated and cleared; nothing leaves the page.",
                ),
            ],
        }
    }
}

impl FaqConfig {
    /// Load faq.toml from resource directory.
    ///
    /// Tries, in order:
    /// 1. {resource_dir}/config/faq.toml
    /// 2. {resource_dir}/faq.toml
    /// 3. Built-in panels
    ///
    /// # Returns
    ///
    /// Always returns `Ok(FaqConfig)` - either loaded or default.
    pub fn load(resource_dir: &Path) -> Result<Self, ConfigError> {
        let paths = [
            resource_dir.join("config").join(FAQ_FILE_NAME),
            resource_dir.join(FAQ_FILE_NAME),
        ];

        for path in &paths {
            if path.exists() {
                match Self::load_from_path(path) {
                    Ok(config) => {
                        info!("FAQ loaded from {}", path.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        warn!("Failed to load FAQ from {}: {}", path.display(), e);
                    }
                }
            }
        }

        warn!("No faq.toml found in resource dir, using built-in panels");
        Ok(Self::default())
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: FaqConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Every panel needs a question and an answer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panels.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "FAQ must contain at least one panel".to_string(),
            });
        }

        for (index, panel) in self.panels.iter().enumerate() {
            if panel.question.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("FAQ panel {index} has an empty question"),
                });
            }

            if panel.answer.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("FAQ panel '{}' has an empty answer", panel.question),
                });
            }
        }

        Ok(())
    }
}
