//! Weather data models
//!
//! Wire types for the OpenWeatherMap current-weather endpoint and the
//! normalized model handed to callers.

use serde::{Deserialize, Serialize};

/// Current conditions for a city, normalized from the provider payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// City name as resolved by the provider
    pub city: String,
    /// ISO 3166 country code (may be empty)
    pub country: String,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Condition description, e.g. "light rain"
    pub description: String,
    /// Latitude of the city
    pub latitude: f64,
    /// Longitude of the city
    pub longitude: f64,
}

/// Raw API response; error payloads share the `cod`/`message` fields
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    /// Numeric on success, sometimes a string on errors ("404")
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
    pub name: Option<String>,
    pub coord: Option<Coord>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: Option<MainData>,
    pub sys: Option<SysData>,
}

impl ApiResponse {
    /// The `cod` field as a number, whichever JSON type it arrived as
    pub fn code(&self) -> Option<u16> {
        match self.cod.as_ref()? {
            serde_json::Value::Number(n) => n.as_u64().and_then(|c| u16::try_from(c).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Condition {
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainData {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SysData {
    #[serde(default)]
    pub country: Option<String>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
