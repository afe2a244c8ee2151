//! Places service configuration

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the Geoapify places service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Geoapify API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.geoapify.com/v2".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PlacesConfig {
    /// Create a configuration for testing against a local server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(SecretString::from("test-key")),
            timeout_secs: 5,
        }
    }

    /// Check whether an API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("base_url must be an http(s) URL: {}", self.base_url));
        }

        Ok(())
    }
}
