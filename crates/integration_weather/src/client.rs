//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-weather API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentWeather, ErrorBody};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The provider does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// API key missing or rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// City query was empty
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// Configured timeout in seconds
        timeout_secs: u64,
    },
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system passed to the API (default: "metric")
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_units() -> String {
    "metric".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            units: default_units(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current weather for a city by name
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// The request URL carries the API key, so it is stripped from the text
    fn map_send_error(&self, err: reqwest::Error) -> WeatherError {
        let err = err.without_url();
        if err.is_timeout() {
            WeatherError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Map a non-success HTTP status to an error
    fn status_error(status: StatusCode, message: Option<String>, city: &str) -> WeatherError {
        let detail = message.unwrap_or_else(|| format!("HTTP {status}"));
        match status {
            StatusCode::NOT_FOUND => WeatherError::CityNotFound(city.to_string()),
            StatusCode::UNAUTHORIZED => WeatherError::AuthenticationFailed(detail),
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(detail),
            _ => WeatherError::RequestFailed(format!("HTTP {status}: {detail}")),
        }
    }

    /// Normalize a successful payload
    fn parse_current(body: ApiResponse, city: &str) -> Result<CurrentWeather, WeatherError> {
        match body.code() {
            Some(200) | None => {},
            Some(404) => return Err(WeatherError::CityNotFound(city.to_string())),
            Some(code) => {
                return Err(WeatherError::RequestFailed(format!(
                    "Provider code {code}: {}",
                    body.message.unwrap_or_default()
                )));
            },
        }

        let main = body
            .main
            .ok_or_else(|| WeatherError::ParseError("Missing main section".to_string()))?;
        let coord = body
            .coord
            .ok_or_else(|| WeatherError::ParseError("Missing coordinates".to_string()))?;

        if !(0.0..=100.0).contains(&main.humidity) {
            return Err(WeatherError::ParseError(format!(
                "Humidity out of range: {}",
                main.humidity
            )));
        }
        // Range checked above
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let humidity = main.humidity.round() as u8;

        let description = body
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .unwrap_or_default();

        Ok(CurrentWeather {
            city: body.name.unwrap_or_else(|| city.to_string()),
            country: body.sys.and_then(|s| s.country).unwrap_or_default(),
            temperature: main.temp,
            humidity,
            description,
            latitude: coord.lat,
            longitude: coord.lon,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self), fields(provider = "openweathermap"))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidQuery(
                "City name cannot be empty".to_string(),
            ));
        }

        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            WeatherError::AuthenticationFailed("API key not configured".to_string())
        })?;

        let url = self.endpoint();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key.expose_secret()),
                ("units", self.config.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!(status = %status, "Received weather response");

        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(Self::status_error(status, body.message, city));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))?;

        Self::parse_current(body, city)
    }

    async fn is_healthy(&self) -> bool {
        self.current_by_city("London").await.is_ok()
    }
}
