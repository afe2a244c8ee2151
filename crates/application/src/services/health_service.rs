//! Provider readiness checks
//!
//! Probes each upstream provider under its own timeout. Weather is the only
//! provider a search cannot do without, so readiness follows weather alone;
//! places and inference are reported but never block readiness.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::{InferencePort, PlacesPort, WeatherPort};

const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

/// Service name used in reports for the weather provider
pub const WEATHER_SERVICE: &str = "weather";
/// Service name used in reports for the places provider
pub const PLACES_SERVICE: &str = "places";
/// Service name used in reports for the inference provider
pub const INFERENCE_SERVICE: &str = "inference";

/// Timeouts for health probes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Timeout applied to every probe unless overridden (default: 5)
    #[serde(default = "default_global_timeout")]
    pub global_timeout_secs: u64,

    /// Per-service overrides in seconds, keyed by service name
    #[serde(default)]
    pub service_timeouts: HashMap<String, u64>,
}

const fn default_global_timeout() -> u64 {
    DEFAULT_HEALTH_CHECK_TIMEOUT_SECS
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            global_timeout_secs: default_global_timeout(),
            service_timeouts: HashMap::new(),
        }
    }
}

impl HealthConfig {
    #[must_use]
    pub fn timeout_for_service(&self, service: &str) -> Duration {
        let secs = self
            .service_timeouts
            .get(service)
            .copied()
            .unwrap_or(self.global_timeout_secs);
        Duration::from_secs(secs)
    }
}

/// Probe outcome for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHealth {
    pub healthy: bool,
    /// Extra detail such as the model name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            healthy: true,
            info: None,
            response_time_ms: None,
            error: None,
        }
    }

    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: None,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out")
    }

    /// Status for a provider that was not wired in
    #[must_use]
    pub fn unconfigured() -> Self {
        Self {
            healthy: false,
            info: Some("Service not configured".to_string()),
            response_time_ms: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Readiness report across providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// True when the weather provider is reachable
    pub ready: bool,
    pub services: HashMap<String, ServiceHealth>,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    #[must_use]
    pub fn new(services: HashMap<String, ServiceHealth>) -> Self {
        let ready = services
            .get(WEATHER_SERVICE)
            .is_some_and(|weather| weather.healthy);

        Self {
            ready,
            services,
            checked_at: chrono::Utc::now(),
        }
    }

    #[must_use]
    pub fn service_status(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.get(name)
    }

    /// Whether every probed provider is healthy
    #[must_use]
    pub fn all_healthy(&self) -> bool {
        self.services.values().all(|s| s.healthy)
    }
}

/// Aggregates readiness probes for the search providers
pub struct HealthService {
    config: HealthConfig,
    weather: Arc<dyn WeatherPort>,
    places: Option<Arc<dyn PlacesPort>>,
    inference: Option<Arc<dyn InferencePort>>,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("config", &self.config)
            .field("weather", &"<WeatherPort>")
            .field("places", &self.places.is_some())
            .field("inference", &self.inference.is_some())
            .finish()
    }
}

impl HealthService {
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            config: HealthConfig::default(),
            weather,
            places: None,
            inference: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: HealthConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_places(mut self, places: Arc<dyn PlacesPort>) -> Self {
        self.places = Some(places);
        self
    }

    #[must_use]
    pub fn with_inference(mut self, inference: Arc<dyn InferencePort>) -> Self {
        self.inference = Some(inference);
        self
    }

    /// Probe all providers concurrently
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        let (weather, places, inference) = tokio::join!(
            self.check_weather(),
            self.check_places(),
            self.check_inference()
        );

        HealthReport::new(HashMap::from([
            (WEATHER_SERVICE.to_string(), weather),
            (PLACES_SERVICE.to_string(), places),
            (INFERENCE_SERVICE.to_string(), inference),
        ]))
    }

    /// Whether searches can currently succeed
    pub async fn is_ready(&self) -> bool {
        self.check_weather().await.healthy
    }

    pub async fn check_weather(&self) -> ServiceHealth {
        self.probe(WEATHER_SERVICE, self.weather.is_available()).await
    }

    pub async fn check_places(&self) -> ServiceHealth {
        let Some(places) = &self.places else {
            return ServiceHealth::unconfigured();
        };
        self.probe(PLACES_SERVICE, places.is_available()).await
    }

    pub async fn check_inference(&self) -> ServiceHealth {
        let Some(inference) = &self.inference else {
            return ServiceHealth::unconfigured();
        };
        let status = self.probe(INFERENCE_SERVICE, inference.is_healthy()).await;
        if status.healthy {
            status.with_info(inference.current_model())
        } else {
            status
        }
    }

    async fn probe<F>(&self, service: &str, check: F) -> ServiceHealth
    where
        F: Future<Output = bool> + Send,
    {
        let timeout_duration = self.config.timeout_for_service(service);
        let start = Instant::now();

        let Ok(available) = timeout(timeout_duration, check).await else {
            warn!(service, "Health check timed out");
            return ServiceHealth::timeout();
        };

        // Probes are bounded by the timeout above, far below u64::MAX ms.
        #[allow(clippy::cast_possible_truncation)]
        let response_time = start.elapsed().as_millis() as u64;

        if available {
            debug!(service, response_time_ms = response_time, "Service healthy");
            ServiceHealth::healthy().with_response_time(response_time)
        } else {
            warn!(service, response_time_ms = response_time, "Service unhealthy");
            ServiceHealth::unhealthy(format!("{service} service unavailable"))
                .with_response_time(response_time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockInferencePort, MockPlacesPort, MockWeatherPort};

    fn weather(available: bool) -> Arc<dyn WeatherPort> {
        let mut mock = MockWeatherPort::new();
        mock.expect_is_available().returning(move || available);
        Arc::new(mock)
    }

    fn places(available: bool) -> Arc<dyn PlacesPort> {
        let mut mock = MockPlacesPort::new();
        mock.expect_is_available().returning(move || available);
        Arc::new(mock)
    }

    fn inference(healthy: bool) -> Arc<dyn InferencePort> {
        let mut mock = MockInferencePort::new();
        mock.expect_is_healthy().returning(move || healthy);
        mock.expect_current_model()
            .returning(|| "gemini-2.5-flash".to_string());
        Arc::new(mock)
    }

    #[test]
    fn config_timeout_override() {
        let config = HealthConfig {
            global_timeout_secs: 5,
            service_timeouts: HashMap::from([("places".to_string(), 2)]),
        };
        assert_eq!(config.timeout_for_service("places"), Duration::from_secs(2));
        assert_eq!(config.timeout_for_service("weather"), Duration::from_secs(5));
    }

    #[test]
    fn service_health_serialization_skips_empty_fields() {
        let json = serde_json::to_value(ServiceHealth::healthy()).unwrap();
        assert_eq!(json, serde_json::json!({"healthy": true}));
    }

    #[tokio::test]
    async fn all_providers_healthy() {
        let service = HealthService::new(weather(true))
            .with_places(places(true))
            .with_inference(inference(true));

        let report = service.check_all().await;

        assert!(report.ready);
        assert!(report.all_healthy());
        assert_eq!(report.services.len(), 3);
        assert_eq!(
            report.service_status(INFERENCE_SERVICE).unwrap().info.as_deref(),
            Some("gemini-2.5-flash")
        );
    }

    #[tokio::test]
    async fn degraded_optional_providers_keep_ready() {
        let service = HealthService::new(weather(true))
            .with_places(places(false))
            .with_inference(inference(false));

        let report = service.check_all().await;

        assert!(report.ready);
        assert!(!report.all_healthy());
        assert!(!report.service_status(PLACES_SERVICE).unwrap().healthy);
    }

    #[tokio::test]
    async fn weather_down_is_not_ready() {
        let service = HealthService::new(weather(false)).with_places(places(true));

        let report = service.check_all().await;

        assert!(!report.ready);
        assert!(!service.is_ready().await);
        assert_eq!(
            report.service_status(WEATHER_SERVICE).unwrap().error.as_deref(),
            Some("weather service unavailable")
        );
    }

    #[tokio::test]
    async fn missing_optional_providers_are_unconfigured() {
        let report = HealthService::new(weather(true)).check_all().await;

        assert!(report.ready);
        assert_eq!(
            report.service_status(PLACES_SERVICE),
            Some(&ServiceHealth::unconfigured())
        );
        assert_eq!(
            report.service_status(INFERENCE_SERVICE),
            Some(&ServiceHealth::unconfigured())
        );
    }

    struct HangingWeather;

    #[async_trait::async_trait]
    impl WeatherPort for HangingWeather {
        async fn fetch_current(
            &self,
            _city: &domain::CityQuery,
        ) -> Result<domain::WeatherSnapshot, crate::error::ApplicationError> {
            Err(crate::error::ApplicationError::Internal("unused".to_string()))
        }

        async fn is_available(&self) -> bool {
            tokio::time::sleep(Duration::from_secs(10)).await;
            true
        }
    }

    #[tokio::test]
    async fn slow_probe_times_out() {
        let config = HealthConfig {
            global_timeout_secs: 5,
            service_timeouts: HashMap::from([(WEATHER_SERVICE.to_string(), 0)]),
        };
        let service = HealthService::new(Arc::new(HangingWeather)).with_config(config);

        let status = service.check_weather().await;

        assert_eq!(status, ServiceHealth::timeout());
    }
}
