//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CityQuery, GeoLocation, Humidity, WeatherSnapshot};
use integration_weather::{
    CurrentWeather, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for current weather using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::CityNotFound(city) => ApplicationError::NotFound(city),
            e @ (WeatherError::ConnectionFailed(_) | WeatherError::Timeout { .. }) => {
                ApplicationError::Network(e.to_string())
            },
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::InvalidQuery(msg) => ApplicationError::Internal(msg),
            e @ (WeatherError::RequestFailed(_)
            | WeatherError::ParseError(_)
            | WeatherError::AuthenticationFailed(_)
            | WeatherError::ServiceUnavailable(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }

    /// Convert provider conditions into a validated snapshot
    fn to_snapshot(current: CurrentWeather) -> Result<WeatherSnapshot, ApplicationError> {
        let location = GeoLocation::new(current.latitude, current.longitude)?;
        let humidity = Humidity::new(u16::from(current.humidity))?;
        Ok(WeatherSnapshot::new(
            current.city,
            current.country,
            current.temperature,
            humidity,
            current.description,
            location,
        )?)
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn fetch_current(&self, city: &CityQuery) -> Result<WeatherSnapshot, ApplicationError> {
        let current = self
            .client
            .current_by_city(city.as_str())
            .await
            .map_err(Self::map_error)?;

        debug!(
            temperature = current.temperature,
            humidity = current.humidity,
            "Retrieved current weather"
        );

        Self::to_snapshot(current)
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
