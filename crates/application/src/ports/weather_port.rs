//! Weather service port
//!
//! Defines the interface for current-weather retrieval by city name.

use async_trait::async_trait;
use domain::{CityQuery, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    ///
    /// # Errors
    ///
    /// - `ApplicationError::NotFound` when the provider does not know the city
    /// - `ApplicationError::Network` on transport failure or timeout
    /// - any other variant for remaining provider failures
    async fn fetch_current(&self, city: &CityQuery) -> Result<WeatherSnapshot, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}
