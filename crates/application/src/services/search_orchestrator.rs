//! City search orchestration
//!
//! Drives one search: validate the city, fetch weather (the only fatal
//! step), then generate tips and aggregate places concurrently and assemble
//! a [`SearchResult`].

use std::sync::Arc;
use std::time::Duration;

use domain::{CityQuery, SearchResult, WeatherSnapshot};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::error::SearchError;
use crate::ports::{InferencePort, PlacesPort, WeatherPort};
use crate::services::places_aggregator::{PlacesAggregator, PlacesQueryConfig};
use crate::services::tip_generator::HealthTipGenerator;

/// Timeouts and geofence for a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weather lookup timeout in milliseconds
    #[serde(default = "default_weather_timeout_ms")]
    pub weather_timeout_ms: u64,

    /// Tip generation timeout in milliseconds
    #[serde(default = "default_tips_timeout_ms")]
    pub tips_timeout_ms: u64,

    /// Per-category place lookup timeout in milliseconds
    #[serde(default = "default_places_timeout_ms")]
    pub places_timeout_ms: u64,

    /// Place search radius in metres
    #[serde(default = "default_places_radius_m")]
    pub places_radius_m: u32,

    /// Maximum places per category
    #[serde(default = "default_places_limit")]
    pub places_limit: usize,
}

const fn default_weather_timeout_ms() -> u64 {
    10_000
}

const fn default_tips_timeout_ms() -> u64 {
    15_000
}

const fn default_places_timeout_ms() -> u64 {
    10_000
}

const fn default_places_radius_m() -> u32 {
    5000
}

const fn default_places_limit() -> usize {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weather_timeout_ms: default_weather_timeout_ms(),
            tips_timeout_ms: default_tips_timeout_ms(),
            places_timeout_ms: default_places_timeout_ms(),
            places_radius_m: default_places_radius_m(),
            places_limit: default_places_limit(),
        }
    }
}

impl SearchConfig {
    fn places_query(&self) -> PlacesQueryConfig {
        PlacesQueryConfig {
            radius_m: self.places_radius_m,
            limit: self.places_limit,
            timeout: Duration::from_millis(self.places_timeout_ms),
        }
    }
}

/// Runs city searches against the weather, inference and places ports
pub struct SearchOrchestrator {
    weather: Arc<dyn WeatherPort>,
    tips: HealthTipGenerator,
    places: PlacesAggregator,
    weather_timeout: Duration,
}

impl std::fmt::Debug for SearchOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchOrchestrator")
            .field("weather", &"<WeatherPort>")
            .field("tips", &self.tips)
            .field("places", &self.places)
            .field("weather_timeout", &self.weather_timeout)
            .finish()
    }
}

impl SearchOrchestrator {
    /// Wire an orchestrator from its ports
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        inference: Arc<dyn InferencePort>,
        places: Arc<dyn PlacesPort>,
        config: &SearchConfig,
    ) -> Self {
        Self {
            weather,
            tips: HealthTipGenerator::new(inference, Duration::from_millis(config.tips_timeout_ms)),
            places: PlacesAggregator::new(places, config.places_query()),
            weather_timeout: Duration::from_millis(config.weather_timeout_ms),
        }
    }

    /// Run a complete search for `city`
    ///
    /// # Errors
    ///
    /// - `SearchError::Validation` for blank input; no provider is contacted
    /// - `SearchError::NotFound`, `Network` or `Provider` when the weather
    ///   lookup fails
    ///
    /// Tip and place failures never fail the search.
    #[instrument(skip(self))]
    pub async fn execute(&self, city: &str) -> Result<SearchResult, SearchError> {
        let query = CityQuery::parse(city)?;

        let weather = self.fetch_weather(&query).await?;
        debug!(
            city = weather.city(),
            temperature_c = weather.temperature_c(),
            "Weather fetched, aggregating tips and places"
        );

        let (tips, places) = tokio::join!(
            self.tips.generate(&weather),
            self.places.aggregate(weather.location())
        );

        let result = SearchResult::assemble(weather, tips, places);
        info!(
            city = result.weather().city(),
            heat_index = result.heat_index().value(),
            fallback_tips = result.tips().is_fallback(),
            places = result.places().total(),
            "Search completed"
        );
        Ok(result)
    }

    /// Run a search that stops as soon as `token` is cancelled
    ///
    /// In-flight provider calls are dropped on cancellation.
    ///
    /// # Errors
    ///
    /// `SearchError::Superseded` if the token fires first, otherwise the
    /// same errors as [`Self::execute`].
    pub async fn execute_cancellable(
        &self,
        city: &str,
        token: &CancellationToken,
    ) -> Result<SearchResult, SearchError> {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(city, "Search cancelled");
                Err(SearchError::Superseded)
            }
            result = self.execute(city) => result,
        }
    }

    /// Check whether the weather provider answers
    pub async fn weather_available(&self) -> bool {
        self.weather.is_available().await
    }

    async fn fetch_weather(&self, query: &CityQuery) -> Result<WeatherSnapshot, SearchError> {
        match timeout(self.weather_timeout, self.weather.fetch_current(query)).await {
            Ok(Ok(snapshot)) => Ok(snapshot),
            Ok(Err(e)) => {
                warn!(city = %query, error = %e, "Weather lookup failed");
                Err(e.into())
            },
            Err(_) => {
                warn!(
                    city = %query,
                    timeout_ms = self.weather_timeout.as_millis(),
                    "Weather lookup timed out"
                );
                Err(SearchError::Network(format!(
                    "Weather lookup timed out after {}ms",
                    self.weather_timeout.as_millis()
                )))
            },
        }
    }
}
